//! Local session persistence configuration.

use serde::{Deserialize, Serialize};

/// Settings for the durable session key/value store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Path to the JSON file holding persisted session keys.
    #[serde(default = "default_storage_path")]
    pub storage_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
        }
    }
}

fn default_storage_path() -> String {
    "data/session.json".to_string()
}
