//! Message lookup with source-text fallback.
//!
//! Given `(context, source, comment)`, returns the translation of a finished
//! message or falls back to the source text. Unfinished and obsolete
//! messages never contribute a translation, whatever text they carry.

use std::{
    borrow::Cow,
    collections::{HashMap, hash_map::Entry},
};

use crate::core::{
    data::{Catalog, Message, MessageKey, TranslationValue, primary_variant},
    plural::PluralRule,
};

/// Lookup index over one catalog.
#[derive(Debug)]
pub struct Translator<'a> {
    index: HashMap<MessageKey, &'a Message>,
    rule: PluralRule,
    duplicates: usize,
}

impl<'a> Translator<'a> {
    /// Index a catalog, resolving its plural rule from the `language`
    /// attribute (English-style rule when unknown).
    pub fn new(catalog: &'a Catalog) -> Self {
        let rule = catalog
            .language
            .as_deref()
            .and_then(PluralRule::for_language)
            .unwrap_or_default();
        Self::with_rule(catalog, rule)
    }

    pub fn with_rule(catalog: &'a Catalog, rule: PluralRule) -> Self {
        let mut index = HashMap::with_capacity(catalog.message_count());
        let mut duplicates = 0;

        for (context, message) in catalog.messages() {
            // Last occurrence wins; the `duplicate` rule reports the shadowed ones.
            match index.entry(message.key(&context.name)) {
                Entry::Occupied(mut slot) => {
                    slot.insert(message);
                    duplicates += 1;
                }
                Entry::Vacant(slot) => {
                    slot.insert(message);
                }
            }
        }

        if duplicates > 0 {
            tracing::debug!("{} duplicate message key(s) shadowed in lookup", duplicates);
        }

        Self {
            index,
            rule,
            duplicates,
        }
    }

    pub fn plural_rule(&self) -> PluralRule {
        self.rule
    }

    /// Number of messages shadowed by a later message with the same key.
    pub fn duplicate_count(&self) -> usize {
        self.duplicates
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Raw entry for an exact key.
    pub fn lookup(&self, key: &MessageKey) -> Option<&'a Message> {
        self.index.get(key).copied()
    }

    /// Find a message, retrying without the comment when a commented lookup
    /// has no match.
    pub fn find(&self, context: &str, source: &str, comment: Option<&str>) -> Option<&'a Message> {
        let exact = self.lookup(&MessageKey::new(context, source, comment));
        match (exact, comment) {
            (Some(message), _) => Some(message),
            (None, Some(comment)) if !comment.is_empty() => {
                self.lookup(&MessageKey::new(context, source, None))
            }
            (None, _) => None,
        }
    }

    /// Numerus form used for count `n` under the catalog's plural rule.
    pub fn form_index(&self, n: u64) -> usize {
        self.rule.form_index(n)
    }

    /// Finished, non-empty translation text of a message, if there is one.
    ///
    /// Uses the primary length variant. `form` selects a numerus form; plain
    /// messages ignore it.
    pub fn translation_of(
        &self,
        context: &str,
        source: &str,
        comment: Option<&str>,
        form: usize,
    ) -> Option<&'a str> {
        self.find(context, source, comment)
            .filter(|message| message.is_finished() && message.is_active())
            .and_then(|message| match &message.translation.value {
                TranslationValue::Single(text) => Some(text.as_str()),
                TranslationValue::Numerus(forms) => forms.get(form).map(String::as_str),
            })
            .map(primary_variant)
            .filter(|text| !text.is_empty())
    }

    /// Translate a message, falling back to `source` when there is no
    /// finished, non-empty translation.
    pub fn translate<'s>(
        &'s self,
        context: &str,
        source: &'s str,
        comment: Option<&str>,
    ) -> Cow<'s, str> {
        match self.translation_of(context, source, comment, 0) {
            Some(text) => Cow::Borrowed(text),
            None => Cow::Borrowed(source),
        }
    }

    /// Translate a plural message for count `n`.
    ///
    /// The numerus form is chosen by the catalog's plural rule. A missing or
    /// empty form counts as untranslated. `%n` and `%Ln` are replaced by `n`.
    pub fn translate_n(&self, context: &str, source: &str, comment: Option<&str>, n: u64) -> String {
        let count = n.to_string();
        self.translation_of(context, source, comment, self.form_index(n))
            .unwrap_or(source)
            .replace("%Ln", &count)
            .replace("%n", &count)
    }
}
