use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, check::check, dump::dump, fmt::fmt, init::init, lookup::lookup,
        stats::stats,
    },
};

/// Dispatch to the command handler selected on the command line.
///
/// # Returns
/// - `Ok(CommandResult)` with error/warning counts and exit behavior
/// - `Err` if the command fails (e.g., invalid config, unreadable catalog)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Lookup(cmd)) => lookup(cmd),
        Some(Command::Stats(cmd)) => stats(cmd),
        Some(Command::Dump(cmd)) => dump(cmd),
        Some(Command::Fmt(cmd)) => fmt(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
