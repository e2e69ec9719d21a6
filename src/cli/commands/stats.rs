use anyhow::{Ok, Result};

use super::super::args::StatsCommand;
use super::{CatalogStats, CommandResult, CommandSummary, StatsSummary, helper::finish};
use crate::{
    core::{CheckContext, LoadedCatalog, TranslationStatus},
    issues::Issue,
};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common.root_dir(), cmd.common.verbose)?;

    let catalogs = ctx
        .catalogs()
        .iter()
        .map(|loaded| {
            let mut stats = catalog_stats(loaded);
            if stats.language.is_none() {
                stats.language = ctx.config.default_language.clone();
            }
            stats
        })
        .collect();

    let issues: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .map(|i| Issue::ParseError(i.clone()))
        .collect();

    Ok(finish(
        CommandSummary::Stats(StatsSummary { catalogs }),
        issues,
        ctx.files.len(),
        true,
    ))
}

pub fn catalog_stats(loaded: &LoadedCatalog) -> CatalogStats {
    let mut stats = CatalogStats {
        file_path: loaded.file_path.clone(),
        language: loaded.catalog.language.clone(),
        total: 0,
        finished: 0,
        unfinished: 0,
        obsolete: 0,
    };

    for (_, message) in loaded.catalog.messages() {
        stats.total += 1;
        match message.translation.status {
            TranslationStatus::Finished => stats.finished += 1,
            TranslationStatus::Unfinished => stats.unfinished += 1,
            TranslationStatus::Vanished | TranslationStatus::Obsolete => stats.obsolete += 1,
        }
    }

    stats
}
