use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".dehintrc.json";

/// File name that is never scanned or rewritten, compared by exact match.
///
/// A stripper script with this name historically ships inside target
/// codebases; excluding it keeps the tool from clobbering a copy of itself
/// when the scanned tree contains one.
pub const SELF_EXCLUDE_FILE: &str = "type_hint_stripper.py";

/// Extension the scanner selects files by.
pub const PYTHON_EXTENSION: &str = "py";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory to scan when no root is given on the command line.
    #[serde(default = "default_root")]
    pub root: String,

    /// Whether to descend into subdirectories of the root.
    #[serde(default)]
    pub recursive: bool,
}

fn default_root() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            recursive: false,
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Load configuration from `.dehintrc.json` in `start_dir`.
///
/// Falls back to defaults when the file does not exist. A file that exists
/// but cannot be read or parsed is an error, not a silent fallback.
pub fn load_config(start_dir: &Path) -> Result<Config> {
    let config_path = start_dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
    Ok(config)
}
