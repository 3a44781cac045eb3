use std::path::PathBuf;

use dialoguer::theme::ColorfulTheme;

use crate::{
    config::Config,
    ledger::{Ledger, Taxonomy},
};

use super::commands::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Session state handed to every command handler. The taxonomy is read-only;
/// the ledger is owned by the session and saved on `exit`.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub taxonomy: Taxonomy,
    pub ledger: Ledger,
    pub ledger_path: PathBuf,
    pub config: Config,
    pub theme: ColorfulTheme,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn status(&self) -> String {
        format!(
            "ShellContext {{ running: {}, last_command: {:?}, records: {}, balance: {} }}",
            self.running,
            self.last_command,
            self.ledger.len(),
            self.ledger.balance()
        )
    }
}
