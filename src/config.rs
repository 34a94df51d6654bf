use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// File extensions picked up when walking directories, without the dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Placed between the converted outputs of multiple input files.
    #[serde(default = "default_separator")]
    pub separator: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string(), "markdown".to_string()]
}
fn default_separator() -> String {
    "\n\n".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            extensions: default_extensions(),
            separator: default_separator(),
            log_level: default_log_level(),
        }
    }
}

pub const DEFAULT_PATHS: &[&str] = &["tgmd.config.json", "config/tgmd.config.json"];

impl Config {
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the first of [`DEFAULT_PATHS`] that exists under `dir`, or
    /// falls back to the defaults.
    pub fn discover(dir: &Path) -> Result<Config, ConfigError> {
        for p in DEFAULT_PATHS {
            let path = dir.join(p);
            if path.is_file() {
                return Config::load(&path);
            }
        }
        Ok(Config::default())
    }
}
