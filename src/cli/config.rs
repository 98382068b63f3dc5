//! Configuration file loading
//!
//! JSON, default path `./glossdb.json`:
//!
//! ```json
//! { "seed_file": "./seed.json", "strict_seed": false, "verify_on_boot": true }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON array of records to load at boot (optional)
    #[serde(default)]
    pub seed_file: Option<String>,

    /// Abort boot on a duplicate seed key instead of skipping it
    #[serde(default)]
    pub strict_seed: bool,

    /// Verify tree invariants after seeding (default: true)
    #[serde(default = "default_verify_on_boot")]
    pub verify_on_boot: bool,

    /// Directory of the config file; relative seed paths resolve against it
    #[serde(skip)]
    base_dir: PathBuf,
}

fn default_verify_on_boot() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_file: None,
            strict_seed: false,
            verify_on_boot: default_verify_on_boot(),
            base_dir: PathBuf::new(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let mut config = Self::from_json(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if let Some(seed) = &self.seed_file {
            if seed.trim().is_empty() {
                return Err(CliError::config_error("seed_file must not be empty"));
            }
        }
        Ok(())
    }

    /// Seed file path, resolved against the config file's directory
    pub fn seed_path(&self) -> Option<PathBuf> {
        self.seed_file.as_ref().map(|seed| {
            let path = Path::new(seed);
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                self.base_dir.join(path)
            }
        })
    }
}
