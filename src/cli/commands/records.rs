use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::ui::table_renderer::{Table, TableColumn};
use crate::errors::LedgerError;
use crate::ledger::Record;

use super::{category, CommandDefinition};

const ADD_PROMPT: &str = "Add some expense or income records with category, description, and amount (separate by spaces):\ncat1 desc1 amt1, cat2 desc2 amt2, cat3 desc3 amt3, ...";
const DELETE_PROMPT: &str = "Which record do you want to delete? (category description amount)";
const DESCRIPTION_MAX_WIDTH: usize = 30;
const FIND_PROMPT: &str = "Which category do you want to find?";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "add",
            "Add records: `cat desc amt`, comma separated",
            "add [cat desc amt, ...]",
            cmd_add,
        ),
        CommandDefinition::new(
            "view",
            "List all records and the balance",
            "view [categories]",
            cmd_view,
        ),
        CommandDefinition::new(
            "delete",
            "Delete the first record matching all three fields",
            "delete [cat desc amt]",
            cmd_delete,
        ),
        CommandDefinition::new(
            "find",
            "List records under a category and its subcategories",
            "find [category]",
            cmd_find,
        ),
        CommandDefinition::new("balance", "Show the current balance", "balance", cmd_balance),
    ]
}

/// Joins the arguments back into one line, or asks for one when none were given.
fn args_or_prompt(
    context: &ShellContext,
    args: &[&str],
    prompt: &str,
) -> Result<Option<String>, CommandError> {
    if args.is_empty() {
        context.ask(prompt)
    } else {
        Ok(Some(args.join(" ")))
    }
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(items) = args_or_prompt(context, args, ADD_PROMPT)? else {
        return Ok(());
    };
    let results = context.ledger.add_batch(&items, &context.taxonomy);
    for result in results {
        match result {
            Ok(record) => io::print_success(record),
            Err(err) => report_add_failure(&err),
        }
    }
    Ok(())
}

fn report_add_failure(err: &LedgerError) {
    match err {
        LedgerError::MalformedRecord(_) => {
            io::print_error("The format of a record should be like this: cat desc amt.")
        }
        LedgerError::InvalidAmount(_) | LedgerError::BalanceOverflow(_) => {
            io::print_error("Invalid value for money.")
        }
        LedgerError::InvalidCategory(_) => {
            io::print_error("The specified category is not in the category list.");
            io::print_error("You can check the category list by command \"view categories\".");
        }
        other => io::print_error(other),
    }
    io::print_error("Fail to add a record.");
}

fn cmd_view(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            output_section("Here's your expense and income records:");
            io::print_info(record_table(context.ledger.records()).render());
            io::print_info(format!("Now you have {} dollars.", context.ledger.balance()));
            Ok(())
        }
        ["categories"] => {
            category::list_categories(context);
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "Usage: view [categories]".into(),
        )),
    }
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(target) = args_or_prompt(context, args, DELETE_PROMPT)? else {
        return Ok(());
    };
    match context.ledger.delete_line(&target) {
        Ok(record) => io::print_success(format!("Deleted {record}")),
        Err(LedgerError::RecordNotFound(record)) => io::print_error(format!(
            "There's no record with {record}. Fail to delete a record."
        )),
        Err(LedgerError::MalformedRecord(_) | LedgerError::InvalidAmount(_)) => {
            io::print_error("Invalid format. Fail to delete a record.")
        }
        Err(err @ LedgerError::BalanceOverflow(_)) => {
            io::print_error(err);
            io::print_error("Fail to delete a record.");
        }
        Err(other) => return Err(other.into()),
    }
    Ok(())
}

fn cmd_find(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(target) = args_or_prompt(context, args, FIND_PROMPT)? else {
        return Ok(());
    };
    match context.ledger.find(target.trim(), &context.taxonomy) {
        Ok(report) => {
            output_section(format!(
                "Here's your expense and income records under category \"{}\":",
                report.category
            ));
            io::print_info(record_table(&report.records).render());
            io::print_info(format!("The total amount above is {}.", report.total));
        }
        Err(LedgerError::NoSuchCategory(_)) => io::print_error("No such category."),
        Err(other) => return Err(other.into()),
    }
    Ok(())
}

fn cmd_balance(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    io::print_info(format!("Now you have {} dollars.", context.ledger.balance()));
    Ok(())
}

fn record_table(records: &[Record]) -> Table {
    let mut table = Table::new(vec![
        TableColumn::left("Category", 15),
        TableColumn::left("Description", 20).with_max_width(DESCRIPTION_MAX_WIDTH),
        TableColumn::right("Amount", 7),
    ]);
    for record in records {
        table.push_row(vec![
            record.category.clone(),
            record.description.clone(),
            record.amount.to_string(),
        ]);
    }
    table
}
