//! Core CLI dispatch, error types, and session startup.

use std::{io, path::PathBuf};

use dialoguer::theme::ColorfulTheme;
use rustyline::error::ReadlineError;
use strsim::levenshtein;
use tracing::{debug, info};

use crate::{
    config::{Config, ConfigManager},
    errors::LedgerError,
    ledger::{parse_balance, Ledger, Snapshot, Taxonomy},
    utils::persistence,
};

use super::commands::{self, CommandDefinition, CommandRegistry};
use super::io as cli_io;
use super::output::{self, OutputPreferences};
pub use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failure of a single shell command. Never fatal to the session.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

/// Failure that ends the shell.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

const OPENING_BALANCE_PROMPT: &str = "How much money do you have?";

impl ShellContext {
    /// Loads configuration and the ledger file, prompting for an opening
    /// balance when the file has none.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new();
        let config = config_manager.load()?;
        if !config_manager.path().exists() {
            config_manager.save(&config)?;
        }
        output::set_preferences(OutputPreferences {
            plain_mode: config.plain_output,
        });

        let ledger_path = config.ledger_path();
        let theme = ColorfulTheme::default();
        let snapshot = persistence::load_snapshot_from_file(&ledger_path)?;
        let ledger = open_ledger(mode, &theme, snapshot)?;
        info!(
            path = %ledger_path.display(),
            records = ledger.len(),
            balance = ledger.balance(),
            "session started"
        );

        Ok(Self::from_parts(mode, config, ledger, ledger_path))
    }

    pub fn from_parts(mode: CliMode, config: Config, ledger: Ledger, ledger_path: PathBuf) -> Self {
        ShellContext {
            mode,
            registry: CommandRegistry::new(commands::all_definitions()),
            taxonomy: Taxonomy::reference(),
            ledger,
            ledger_path,
            config,
            theme: ColorfulTheme::default(),
            last_command: None,
            running: true,
        }
    }

    pub(crate) fn prompt(&self) -> String {
        format!("ledger ({})> ", self.ledger.balance())
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandDefinition> {
        self.registry.get(name)
    }

    /// Reads one answer from the user in the current mode.
    pub(crate) fn ask(&self, prompt: &str) -> Result<Option<String>, CommandError> {
        cli_io::prompt_text(self.mode, &self.theme, prompt)
    }

    pub(crate) fn save(&self) -> CommandResult {
        persistence::save_ledger_to_file(&self.ledger, &self.ledger_path)?;
        Ok(())
    }

    pub(crate) fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<LoopControl, CommandError> {
        let name = commands::resolve_alias(command);
        if let Some(handler) = self.registry.get(name).map(|definition| definition.handler) {
            debug!(command = name, "dispatching");
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(command);
            Ok(LoopControl::Continue)
        }
    }

    /// Runs one command line without the line editor.
    pub fn process_line(&mut self, line: &str) -> Result<bool, CommandError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((raw, args)) = tokens.split_first() else {
            return Ok(true);
        };
        self.last_command = Some(line.trim().to_string());
        match self.dispatch(&raw.to_lowercase(), args)? {
            LoopControl::Continue => Ok(true),
            LoopControl::Exit => {
                self.running = false;
                Ok(false)
            }
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_error("Invalid command. Try again.");

        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, input), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 2 {
                cli_io::print_info(format!("Did you mean `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(cli_io::confirm_action(&self.theme, "Exit without saving?")?)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_info("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Io(err) => {
                cli_io::print_error(format!("I/O failure: {err}"));
                Ok(())
            }
            other => {
                cli_io::print_error(other);
                Ok(())
            }
        }
    }
}

/// Builds the session ledger from the file contents, falling back to a
/// user-supplied opening balance and then to zero.
fn open_ledger(
    mode: CliMode,
    theme: &ColorfulTheme,
    snapshot: Option<Snapshot>,
) -> Result<Ledger, CliError> {
    match snapshot {
        Some(Snapshot {
            balance: Some(balance),
            records,
        }) => {
            cli_io::print_info("Welcome back!");
            Ok(Ledger::load(balance, records))
        }
        Some(Snapshot {
            balance: None,
            records,
        }) => Ok(Ledger::load(ask_opening_balance(mode, theme)?, records)),
        None => Ok(Ledger::new(ask_opening_balance(mode, theme)?)),
    }
}

fn ask_opening_balance(mode: CliMode, theme: &ColorfulTheme) -> Result<i64, CliError> {
    let answer = cli_io::prompt_text(mode, theme, OPENING_BALANCE_PROMPT)?;
    Ok(resolve_opening_balance(answer.as_deref()))
}

pub(crate) fn resolve_opening_balance(answer: Option<&str>) -> i64 {
    match answer.map(parse_balance) {
        Some(Ok(balance)) => balance,
        Some(Err(err)) => {
            debug!(%err, "opening balance rejected");
            cli_io::print_warning("Invalid value for money. Set to 0 by default.");
            0
        }
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Record;
    use tempfile::{tempdir, TempDir};

    fn context(opening: i64) -> (ShellContext, TempDir) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("record.txt");
        let context = ShellContext::from_parts(
            CliMode::Script,
            Config::default(),
            Ledger::new(opening),
            path,
        );
        (context, dir)
    }

    #[test]
    fn opening_balance_falls_back_to_zero() {
        assert_eq!(resolve_opening_balance(Some("250")), 250);
        assert_eq!(resolve_opening_balance(Some("-3")), -3);
        assert_eq!(resolve_opening_balance(Some("a lot")), 0);
        assert_eq!(resolve_opening_balance(None), 0);
    }

    #[test]
    fn stored_balance_skips_the_prompt() {
        let snapshot = Snapshot {
            balance: Some(70),
            records: vec![Record::new("food", "meal", -30)],
        };
        let ledger = open_ledger(CliMode::Script, &ColorfulTheme::default(), Some(snapshot)).unwrap();
        assert_eq!(ledger.balance(), 70);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn add_and_exit_persist_the_ledger() {
        let (mut context, _dir) = context(100);
        assert!(context.process_line("add food meal -50, car ride -10").unwrap());
        assert_eq!(context.ledger.balance(), 50);
        assert_eq!(context.ledger.records(), &[Record::new("food", "meal", -50)]);

        assert!(!context.process_line("exit").unwrap());
        assert!(!context.running);
        let saved = std::fs::read_to_string(&context.ledger_path).unwrap();
        assert_eq!(saved, "50\nfood, meal, -50\n");
    }

    #[test]
    fn delete_command_restores_balance() {
        let (mut context, _dir) = context(10);
        context.process_line("add bonus q1 40").unwrap();
        context.process_line("delete bonus q1 40").unwrap();
        assert_eq!(context.ledger.balance(), 10);
        assert!(context.ledger.is_empty());

        context.process_line("delete bonus q1 40").unwrap();
        context.process_line("delete bonus 40").unwrap();
        assert_eq!(context.ledger.balance(), 10);
    }

    #[test]
    fn commands_are_case_insensitive_and_aliased() {
        let (mut context, _dir) = context(0);
        assert!(context.process_line("ADD salary june 5").unwrap());
        assert_eq!(context.ledger.balance(), 5);
        assert!(!context.process_line("quit").unwrap());
    }

    #[test]
    fn unknown_and_blank_lines_keep_running() {
        let (mut context, _dir) = context(0);
        assert!(context.process_line("").unwrap());
        assert!(context.process_line("veiw").unwrap());
        assert!(context.process_line("view categories").unwrap());
        assert!(context.process_line("find expense").unwrap());
        assert!(context.process_line("find car").unwrap());
        assert!(context.running);
        assert_eq!(context.last_command.as_deref(), Some("find car"));
    }

    #[test]
    fn view_rejects_unknown_subcommand() {
        let (mut context, _dir) = context(0);
        let err = context.process_line("view accounts").unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(_)));
    }
}
