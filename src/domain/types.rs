use serde::{Deserialize, Serialize};

/// Integer address of a catalog entry.
pub type EntryIndex = i32;

/// Result of a data source connect attempt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionOutcome {
    Ready,
    Failed,
}

impl ConnectionOutcome {
    pub fn is_ready(self) -> bool {
        self == ConnectionOutcome::Ready
    }
}

/// Label summarising both catalog flags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CatalogState {
    /// No outcome received yet
    Pending,
    Ready,
    Failed,
    /// Both outcomes were received across separate connect attempts
    Conflicted,
}

/// Point-in-time snapshot of a catalog's connection flags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogStatus {
    pub state: CatalogState,
    pub is_ready: bool,
    pub failed: bool,
}

impl CatalogStatus {
    pub fn new(is_ready: bool, failed: bool) -> Self {
        let state = match (is_ready, failed) {
            (false, false) => CatalogState::Pending,
            (true, false) => CatalogState::Ready,
            (false, true) => CatalogState::Failed,
            (true, true) => CatalogState::Conflicted,
        };

        Self {
            state,
            is_ready,
            failed,
        }
    }
}
