use directories::ProjectDirs;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Service endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8882";

/// Index name used when nothing else is configured.
pub const DEFAULT_INDEX: &str = "site-articles";

/// Embedding model requested at index creation.
pub const DEFAULT_MODEL: &str = "flax-sentence-embeddings/all_datasets_v4_mpnet-base";

/// Dataset file looked up relative to the working directory.
pub const DEFAULT_DATASET: &str = "articles.csv";

/// Connection and dataset settings for the demo.
///
/// Loaded from a JSON file in the platform config directory when present;
/// every field falls back to its default otherwise. CLI flags override per
/// invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub endpoint: String,
    pub index_name: String,
    pub model: String,
    pub dataset: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            index_name: DEFAULT_INDEX.to_string(),
            model: DEFAULT_MODEL.to_string(),
            dataset: PathBuf::from(DEFAULT_DATASET),
        }
    }
}

impl DemoConfig {
    /// Path of the config file in the platform config directory, if one can
    /// be determined.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "sitesearch", "sitesearch")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Loads the config file, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    debug!("Ignoring malformed config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
