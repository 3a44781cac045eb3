use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    errors::LedgerError,
    utils::{paths, persistence::write_atomic},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ledger file; relative paths resolve against the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_file: Option<PathBuf>,
    pub indent_unit: String,
    pub plain_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger_file: None,
            indent_unit: "  ".into(),
            plain_output: false,
        }
    }
}

impl Config {
    /// Resolves the ledger path: `POCKET_LEDGER_FILE`, then the configured
    /// file, then `record.txt` in the data directory.
    pub fn ledger_path(&self) -> PathBuf {
        if let Some(path) = paths::ledger_file_override() {
            return path;
        }
        match &self.ledger_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => paths::app_data_dir().join(path),
            None => paths::default_ledger_file(),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_path(paths::config_file())
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Result<Config, LedgerError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_path(dir.path().join("config.json"));
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn save_roundtrips_and_cleans_tmp() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_path(dir.path().join("config.json"));
        let config = Config {
            ledger_file: Some(PathBuf::from("/tmp/ledger.txt")),
            indent_unit: "\t".into(),
            plain_output: true,
        };
        manager.save(&config).unwrap();
        assert!(!dir.path().join("config.json.tmp").exists());
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "plain_output": true }"#).unwrap();
        let config = ConfigManager::with_path(path).load().unwrap();
        assert!(config.plain_output);
        assert_eq!(config.indent_unit, "  ");
        assert!(config.ledger_file.is_none());
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ nope").unwrap();
        let err = ConfigManager::with_path(path).load().unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }
}
