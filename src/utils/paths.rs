use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".pocket_ledger";
const LEDGER_FILE: &str = "record.txt";
const CONFIG_FILE: &str = "config.json";

/// Returns the application-specific data directory, defaulting to `~/.pocket_ledger`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("POCKET_LEDGER_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Default location of the ledger file inside the data directory.
pub fn default_ledger_file() -> PathBuf {
    app_data_dir().join(LEDGER_FILE)
}

/// Path to the JSON settings file.
pub fn config_file() -> PathBuf {
    app_data_dir().join(CONFIG_FILE)
}

/// An explicit ledger path from `POCKET_LEDGER_FILE`, if set.
pub fn ledger_file_override() -> Option<PathBuf> {
    env::var_os("POCKET_LEDGER_FILE")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
