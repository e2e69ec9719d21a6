//! Placeholder consistency rule.
//!
//! `QString::arg` markers (`%1` .. `%99`, with optional `L` for localized
//! numbers) and the numerus count marker `%n` must survive translation.
//! `%L1` and `%1` fill the same argument, so they compare equal.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;

use crate::{
    core::{CheckContext, LoadedCatalog, Message, length_variants},
    issues::PlaceholderIssue,
    rules::helpers::{checked_messages, message_context},
};

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%L?(\d{1,2}|n)").unwrap());

pub fn check_placeholder_issues(ctx: &CheckContext) -> Vec<PlaceholderIssue> {
    if !ctx.config.check_placeholders {
        return Vec::new();
    }
    check_placeholders(ctx.catalogs(), &ctx.config.ignore_contexts)
}

pub fn check_placeholders(
    catalogs: &[LoadedCatalog],
    ignore_contexts: &[String],
) -> Vec<PlaceholderIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        for (context, message) in checked_messages(loaded, ignore_contexts) {
            if !message.is_finished() || !message.is_active() {
                continue;
            }
            if let Some((missing, extra)) = compare_message(message) {
                issues.push(PlaceholderIssue {
                    context: message_context(&loaded.file_path, context, message),
                    missing,
                    extra,
                });
            }
        }
    }

    issues
}

/// Markers present in `text`, normalized to `%1` / `%n`.
pub fn placeholders(text: &str) -> BTreeSet<String> {
    PLACEHOLDER_REGEX
        .captures_iter(text)
        .map(|caps| format!("%{}", &caps[1]))
        .collect()
}

fn compare_message(message: &Message) -> Option<(Vec<String>, Vec<String>)> {
    let expected = placeholders(&message.source);
    let mut missing = BTreeSet::new();
    let mut extra = BTreeSet::new();

    // Each length variant is shown on its own, so each must carry the markers.
    let texts = message.translation.value.texts().iter();
    for text in texts.flat_map(|text| length_variants(text)) {
        // Empty text falls back to the source and is reported elsewhere.
        if text.is_empty() {
            continue;
        }
        let found = placeholders(text);
        for marker in expected.difference(&found) {
            // A numerus form may spell the count out ("one file").
            if message.numerus && marker == "%n" {
                continue;
            }
            missing.insert(marker.clone());
        }
        extra.extend(found.difference(&expected).cloned());
    }

    if missing.is_empty() && extra.is_empty() {
        None
    } else {
        Some((missing.into_iter().collect(), extra.into_iter().collect()))
    }
}
