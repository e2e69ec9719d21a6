//! Duplicate message and context detection rules.
//!
//! Lookups resolve a `(context, source, comment)` key to its last
//! definition, so earlier messages with the same key are dead text.
//! Repeated context names are legal but usually a merge accident.

use std::collections::{HashMap, hash_map::Entry};

use crate::{
    core::{CheckContext, LoadedCatalog, MessageContext, MessageKey},
    issues::{DuplicateContextIssue, DuplicateIssue},
    rules::helpers::{checked_messages, message_context},
};

pub fn check_duplicate_issues(ctx: &CheckContext) -> Vec<DuplicateIssue> {
    check_duplicates(ctx.catalogs(), &ctx.config.ignore_contexts)
}

pub fn check_duplicate_context_issues(ctx: &CheckContext) -> Vec<DuplicateContextIssue> {
    check_duplicate_contexts(ctx.catalogs(), &ctx.config.ignore_contexts)
}

/// Report every message that a later message with the same key shadows.
pub fn check_duplicates(
    catalogs: &[LoadedCatalog],
    ignore_contexts: &[String],
) -> Vec<DuplicateIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        let mut latest: HashMap<MessageKey, MessageContext> = HashMap::new();
        for (context, message) in checked_messages(loaded, ignore_contexts) {
            let current = message_context(&loaded.file_path, context, message);
            match latest.entry(message.key(&context.name)) {
                Entry::Occupied(mut slot) => issues.push(DuplicateIssue {
                    context: slot.insert(current),
                    overridden_at: message.line,
                }),
                Entry::Vacant(slot) => {
                    slot.insert(current);
                }
            }
        }
    }

    issues
}

/// Report every context whose name was already used earlier in the catalog.
pub fn check_duplicate_contexts(
    catalogs: &[LoadedCatalog],
    ignore_contexts: &[String],
) -> Vec<DuplicateContextIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        let mut first_lines: HashMap<&str, usize> = HashMap::new();
        for context in &loaded.catalog.contexts {
            if ignore_contexts.iter().any(|name| name == &context.name) {
                continue;
            }
            match first_lines.entry(context.name.as_str()) {
                Entry::Occupied(first) => issues.push(DuplicateContextIssue {
                    file_path: loaded.file_path.clone(),
                    line: context.line,
                    name: context.name.clone(),
                    first_line: *first.get(),
                }),
                Entry::Vacant(slot) => {
                    slot.insert(context.line);
                }
            }
        }
    }

    issues
}
