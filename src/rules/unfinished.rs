//! Unfinished translation detection rule.
//!
//! A message marked `type="unfinished"` is untranslated no matter what text
//! it carries; lookups fall back to the source text.

use crate::{
    core::{CheckContext, LoadedCatalog, TranslationStatus},
    issues::UnfinishedIssue,
    rules::helpers::{checked_messages, message_context},
};

pub fn check_unfinished_issues(ctx: &CheckContext) -> Vec<UnfinishedIssue> {
    check_unfinished(ctx.catalogs(), &ctx.config.ignore_contexts)
}

pub fn check_unfinished(
    catalogs: &[LoadedCatalog],
    ignore_contexts: &[String],
) -> Vec<UnfinishedIssue> {
    catalogs
        .iter()
        .flat_map(|loaded| {
            checked_messages(loaded, ignore_contexts)
                .filter(|(_, message)| message.translation.status == TranslationStatus::Unfinished)
                .map(|(context, message)| UnfinishedIssue {
                    context: message_context(&loaded.file_path, context, message),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::{Context, Message},
        rules::helpers::fixtures::loaded,
    };

    fn menu() -> Context {
        let mut menu = Context::new("MAC_APPLICATION_MENU");
        menu.messages.push(Message::new("Services", "სერვისები"));
        menu.messages.push(
            Message::new("Hide Others", "სხვების დამალვა")
                .with_status(TranslationStatus::Unfinished),
        );
        menu.messages
            .push(Message::new("Show All", "").with_status(TranslationStatus::Unfinished));
        menu.messages
            .push(Message::new("Quit %1", "").with_status(TranslationStatus::Vanished));
        menu
    }

    #[test]
    fn test_reports_unfinished_with_and_without_text() {
        let catalogs = vec![loaded(Some("ka_GE"), vec![menu()])];
        let issues = check_unfinished(&catalogs, &[]);

        let sources: Vec<&str> = issues.iter().map(|i| i.context.source.as_str()).collect();
        assert_eq!(sources, vec!["Hide Others", "Show All"]);
        assert_eq!(issues[0].context.context_name, "MAC_APPLICATION_MENU");
    }

    #[test]
    fn test_ignored_context() {
        let catalogs = vec![loaded(Some("ka_GE"), vec![menu()])];
        let issues = check_unfinished(&catalogs, &["MAC_APPLICATION_MENU".to_string()]);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_finished_catalog_is_clean() {
        let mut close = Context::new("CloseButton");
        close
            .messages
            .push(Message::new("Close Tab", "ჩანართის დახურვა"));
        let catalogs = vec![loaded(Some("ka_GE"), vec![close])];
        assert!(check_unfinished(&catalogs, &[]).is_empty());
    }
}
