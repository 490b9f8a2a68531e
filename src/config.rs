/*!

  Configuration for the workbench, including the export destination.

*/

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The default export destination, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "truth_tables.txt";

/// Workbench configuration. Loadable from a JSON file; every field has a
/// default so a partial file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Destination path for the exported truth tables
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// The error returned when a config file cannot be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// The config file that failed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON for a [Config]
    #[error("malformed config {}: {source}", path.display())]
    Parse {
        /// The config file that failed
        path: PathBuf,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },
}

impl Config {
    /// Loads a [Config] from a JSON file at `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output() {
        assert_eq!(Config::default().output, PathBuf::from("truth_tables.txt"));
    }

    #[test]
    fn partial_json() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        let config: Config = serde_json::from_str(r#"{"output": "out/tables.txt"}"#).unwrap();
        assert_eq!(config.output, PathBuf::from("out/tables.txt"));
    }
}
