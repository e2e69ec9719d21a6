//! Empty translation detection rule.
//!
//! Finished messages whose text is empty (or that leave a numerus form
//! empty) silently fall back to the source text at runtime.

use crate::{
    core::{CheckContext, LoadedCatalog, TranslationValue},
    issues::EmptyTranslationIssue,
    rules::helpers::{checked_messages, message_context},
};

pub fn check_empty_translation_issues(ctx: &CheckContext) -> Vec<EmptyTranslationIssue> {
    check_empty_translations(ctx.catalogs(), &ctx.config.ignore_contexts)
}

pub fn check_empty_translations(
    catalogs: &[LoadedCatalog],
    ignore_contexts: &[String],
) -> Vec<EmptyTranslationIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        for (context, message) in checked_messages(loaded, ignore_contexts) {
            if !message.is_finished() {
                continue;
            }

            let empty_forms: Vec<Option<usize>> = match &message.translation.value {
                TranslationValue::Single(text) if text.is_empty() => vec![None],
                TranslationValue::Single(_) => Vec::new(),
                TranslationValue::Numerus(forms) if forms.is_empty() => vec![None],
                TranslationValue::Numerus(forms) => forms
                    .iter()
                    .enumerate()
                    .filter(|(_, form)| form.is_empty())
                    .map(|(index, _)| Some(index))
                    .collect(),
            };

            for form in empty_forms {
                issues.push(EmptyTranslationIssue {
                    context: message_context(&loaded.file_path, context, message),
                    form,
                });
            }
        }
    }

    issues
}
