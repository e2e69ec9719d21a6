//! Fmt command - rewrite catalogs in the layout lupdate writes.
//!
//! Catalogs are re-serialized with the writer and compared with the file
//! on disk. Without `--apply` the command only lists files that would
//! change and exits with 1 when there are any.

use std::fs;

use anyhow::{Context, Ok, Result};

use super::super::args::FmtCommand;
use super::{CommandResult, CommandSummary, FmtSummary, helper::finish};
use crate::{
    core::{CheckContext, writer::write_ts},
    issues::Issue,
};

pub fn fmt(cmd: FmtCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common.root_dir(), cmd.common.verbose)?;
    let apply = cmd.apply;

    let mut changed_files = Vec::new();
    for loaded in ctx.catalogs() {
        let current = fs::read_to_string(&loaded.file_path)
            .with_context(|| format!("Failed to read TS file: {}", loaded.file_path))?;
        let formatted = write_ts(&loaded.catalog);
        if current == formatted {
            continue;
        }

        if apply {
            fs::write(&loaded.file_path, &formatted)
                .with_context(|| format!("Failed to write TS file: {}", loaded.file_path))?;
            tracing::debug!("rewrote {}", loaded.file_path);
        }
        changed_files.push(loaded.file_path.clone());
    }

    let issues: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .map(|i| Issue::ParseError(i.clone()))
        .collect();

    Ok(finish(
        CommandSummary::Fmt(FmtSummary {
            changed_files,
            is_apply: apply,
        }),
        issues,
        ctx.files.len(),
        true,
    ))
}
