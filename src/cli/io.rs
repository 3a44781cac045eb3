use std::{
    fmt,
    io::{self, Write},
};

use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::cli::core::{CliMode, CommandError};
use crate::cli::output;

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print a warning message via the standard CLI output helpers.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Print an error message via the standard CLI output helpers.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

/// Print a success message via the standard CLI output helpers.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(theme: &ColorfulTheme, prompt: &str) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(CommandError::from)
}

/// Prompt for one line of free-form text. Returns `None` at end of input.
pub fn prompt_text(
    mode: CliMode,
    theme: &ColorfulTheme,
    prompt: &str,
) -> Result<Option<String>, CommandError> {
    match mode {
        CliMode::Interactive => Input::<String>::with_theme(theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map(|answer| Some(answer.trim().to_string()))
            .map_err(CommandError::from),
        CliMode::Script => read_script_line(prompt),
    }
}

fn read_script_line(prompt: &str) -> Result<Option<String>, CommandError> {
    output::prompt(prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
