use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;

use super::CommandDefinition;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "categories",
        "Show the category tree (also `view categories`)",
        "categories",
        cmd_categories,
    )]
}

fn cmd_categories(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(CommandError::InvalidArguments(
            "`categories` takes no arguments".into(),
        ));
    }
    list_categories(context);
    Ok(())
}

pub(crate) fn list_categories(context: &ShellContext) {
    output_section("Categories:");
    for line in context.taxonomy.render(&context.config.indent_unit) {
        io::print_info(line);
    }
}
