use std::sync::Arc;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing::{info, warn};

use clients_catalog::app::ClientsCatalog;
use clients_catalog::domain::ConnectionOutcome;
use clients_catalog::infra::{InMemoryConfig, InMemoryDataSource, LogFormat, init_tracing};

const DEMO_CLIENTS: [&str; 3] = ["client0", "client1", "client2"];

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing(LogFormat::from_env()?);

    let config = InMemoryConfig::from_env().context("invalid in-memory store configuration")?;
    info!(?config, "Starting clients catalog demo");

    // The caller owns the data source; the catalog only shares it
    let data_source = Arc::new(InMemoryDataSource::new(config));
    let catalog = ClientsCatalog::new(Arc::clone(&data_source) as _);

    match catalog.initialize()? {
        ConnectionOutcome::Ready => {
            for (index, name) in (0..).zip(DEMO_CLIENTS) {
                catalog.add(index, name)?;
            }

            for index in 0..=DEMO_CLIENTS.len() as i32 {
                if catalog.has(index)? {
                    let client = catalog.get(index)?;
                    info!(index, %client, "Found client");
                } else {
                    info!(index, "No client at index");
                }
            }

            info!(entries = data_source.len()?, "Catalog populated");
        }
        ConnectionOutcome::Failed => {
            warn!("Data source unavailable, skipping catalog population");
        }
    }

    println!("{}", serde_json::to_string_pretty(&catalog.status())?);

    Ok(())
}
