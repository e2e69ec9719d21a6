use anyhow::{Context, Ok, Result};

use super::super::args::DumpCommand;
use super::{CommandResult, CommandSummary, DumpSummary, helper::finish};
use crate::core::parsers::parse_ts_file;

pub fn dump(cmd: DumpCommand) -> Result<CommandResult> {
    let catalog = parse_ts_file(&cmd.file)?;
    let json = serde_json::to_string_pretty(&catalog)
        .with_context(|| format!("Failed to serialize {}", cmd.file.display()))?;

    Ok(finish(
        CommandSummary::Dump(DumpSummary { json }),
        Vec::new(),
        1,
        false,
    ))
}
