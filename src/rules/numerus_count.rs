//! Numerus form count rule.
//!
//! A numerus message must carry exactly one form per plural category of
//! the catalog's language. Catalogs whose language has no known rule are
//! skipped.

use crate::{
    core::{CheckContext, LoadedCatalog, PluralRule, TranslationValue},
    issues::NumerusCountIssue,
    rules::helpers::{checked_messages, message_context},
};

pub fn check_numerus_count_issues(ctx: &CheckContext) -> Vec<NumerusCountIssue> {
    check_numerus_count(
        ctx.catalogs(),
        ctx.config.default_language.as_deref(),
        &ctx.config.ignore_contexts,
    )
}

pub fn check_numerus_count(
    catalogs: &[LoadedCatalog],
    default_language: Option<&str>,
    ignore_contexts: &[String],
) -> Vec<NumerusCountIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        let Some(language) = loaded.catalog.language.as_deref().or(default_language) else {
            tracing::debug!("{}: no language, numerus forms not checked", loaded.file_path);
            continue;
        };
        let Some(rule) = PluralRule::for_language(language) else {
            tracing::debug!(
                "{}: no plural rule for language '{}', numerus forms not checked",
                loaded.file_path,
                language
            );
            continue;
        };
        let expected = rule.form_count();

        for (context, message) in checked_messages(loaded, ignore_contexts) {
            if !message.numerus || !message.is_active() {
                continue;
            }
            let found = match &message.translation.value {
                TranslationValue::Numerus(forms) => forms.len(),
                TranslationValue::Single(_) => 1,
            };
            if found != expected {
                issues.push(NumerusCountIssue {
                    context: message_context(&loaded.file_path, context, message),
                    language: language.to_string(),
                    expected,
                    found,
                });
            }
        }
    }

    issues
}
