//! Configuration manager for flicks.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const DEFAULT_FEED_PATH: &str = "data/movies.csv";
const STORAGE_DIR_NAME: &str = "flicks";
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Instance name shown by the presentation layer.
    #[serde(default)]
    pub name: String,
    /// Directory holding the two JSON record files.
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
    /// Path to the comma-separated catalog feed.
    #[serde(default = "default_feed_path")]
    pub catalog_feed: PathBuf,
    #[serde(default)]
    version: String,
    #[serde(skip)]
    path: PathBuf,
    /// Related to the OMDb lookup configuration.
    #[serde(skip_serializing)]
    pub metadata: Option<Metadata>,
}

/// OMDb lookup configuration.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// API key used when the `OMDB_API_KEY` variable is unset.
    pub api_key: Option<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            name: String::default(),
            storage_dir: default_storage_dir(),
            catalog_feed: default_feed_path(),
            version: String::default(),
            path: PathBuf::default(),
            metadata: None,
        }
    }
}

impl Configuration {
    /// Update the configuration file location.
    pub fn path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }

    /// Reads the `config.yaml` file from the specified path or the default
    /// location. A missing or invalid file falls back to defaults.
    pub fn read(self) -> Arc<Self> {
        let file_path = if self.path.is_file() {
            &self.path
        } else {
            &Path::new(DEFAULT_CONFIG_PATH).to_path_buf()
        };

        match File::open(file_path) {
            Ok(file) => match serde_yaml::from_reader::<_, Configuration>(file)
            {
                Ok(mut config) => {
                    // set app version.
                    config.version = VERSION.to_owned();
                    Arc::new(config)
                },
                Err(err) => Arc::new(self.error(err)),
            },
            Err(err) => Arc::new(self.error(err)),
        }
    }

    /// Configured OMDb API key, if any.
    pub fn metadata_api_key(&self) -> Option<String> {
        self.metadata.as_ref().and_then(|m| m.api_key.clone())
    }

    /// Return a default configuration as fallback.
    fn error(&self, err: impl std::error::Error) -> Self {
        tracing::error!(error = %err, "`config.yaml` file not found");
        Self {
            version: VERSION.to_owned(),
            ..Default::default()
        }
    }
}

/// Per-user application data directory.
fn default_storage_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .map(|dir| dir.join(STORAGE_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(format!(".{STORAGE_DIR_NAME}")))
}

fn default_feed_path() -> PathBuf {
    PathBuf::from(DEFAULT_FEED_PATH)
}
