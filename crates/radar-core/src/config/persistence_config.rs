use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults::DEFAULT_PERSISTENCE_PATH;

/// Where trigger timestamps are persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PersistenceConfig {
    pub path: PathBuf,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PERSISTENCE_PATH),
        }
    }
}
