//! Obsolete message detection rule.
//!
//! lupdate keeps messages that disappeared from the sources as `vanished`
//! (or `obsolete` in older files). They never take part in lookups.

use crate::{
    core::{CheckContext, LoadedCatalog},
    issues::ObsoleteIssue,
    rules::helpers::{checked_messages, message_context},
};

pub fn check_obsolete_issues(ctx: &CheckContext) -> Vec<ObsoleteIssue> {
    check_obsolete(ctx.catalogs(), &ctx.config.ignore_contexts)
}

pub fn check_obsolete(catalogs: &[LoadedCatalog], ignore_contexts: &[String]) -> Vec<ObsoleteIssue> {
    catalogs
        .iter()
        .flat_map(|loaded| {
            checked_messages(loaded, ignore_contexts)
                .filter(|(_, message)| !message.is_active())
                .map(|(context, message)| ObsoleteIssue {
                    context: message_context(&loaded.file_path, context, message),
                    status: message.translation.status,
                })
        })
        .collect()
}
