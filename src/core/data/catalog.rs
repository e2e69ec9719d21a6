use std::fmt;

use serde::Serialize;

/// A parsed Qt Linguist translation document (`<TS>` root).
///
/// Contexts and messages keep document order so that writing the catalog
/// back produces the same layout lupdate would.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Format version attribute (e.g., "2.1").
    pub version: String,
    /// Target language (e.g., "ka_GE").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    pub contexts: Vec<Context>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            version: DEFAULT_TS_VERSION.to_string(),
            language: None,
            source_language: None,
            contexts: Vec::new(),
        }
    }
}

/// Format version written by current lupdate releases.
pub const DEFAULT_TS_VERSION: &str = "2.1";

impl Catalog {
    /// Iterate over all `(context, message)` pairs in document order.
    pub fn messages(&self) -> impl Iterator<Item = (&Context, &Message)> {
        self.contexts
            .iter()
            .flat_map(|ctx| ctx.messages.iter().map(move |msg| (ctx, msg)))
    }

    /// Find the first context with the given name.
    pub fn find_context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|ctx| ctx.name == name)
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|ctx| ctx.messages.len()).sum()
    }
}

/// A named group of messages, usually a Qt class name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub messages: Vec<Message>,
    /// Line of the `<context>` element (0 when built in memory).
    #[serde(skip)]
    pub line: usize,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            messages: Vec::new(),
            line: 0,
        }
    }
}

/// A source location recorded by lupdate (`<location filename=".." line=".."/>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
}

/// One translatable unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_source: Option<String>,
    /// Disambiguation comment; part of the lookup key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_comment: Option<String>,
    /// Developer note shown to translators. Not part of the key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translator_comment: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<SourceLocation>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub numerus: bool,
    pub translation: Translation,
    /// `<userdata>`, `extra-*` and other elements kept verbatim for writing back.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<MessageExtra>,
    /// Line of the `<message>` element (0 when built in memory).
    #[serde(skip)]
    pub line: usize,
}

impl Message {
    /// A finished, non-plural message.
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            id: None,
            source: source.into(),
            old_source: None,
            comment: None,
            old_comment: None,
            extra_comment: None,
            translator_comment: None,
            locations: Vec::new(),
            numerus: false,
            translation: Translation::finished(translation),
            extras: Vec::new(),
            line: 0,
        }
    }

    /// A finished plural message with the given numerus forms.
    pub fn numerus(source: impl Into<String>, forms: Vec<String>) -> Self {
        Self {
            numerus: true,
            translation: Translation {
                status: TranslationStatus::Finished,
                value: TranslationValue::Numerus(forms),
            },
            ..Self::new(source, "")
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_status(mut self, status: TranslationStatus) -> Self {
        self.translation.status = status;
        self
    }

    /// Build the lookup key of this message inside `context`.
    pub fn key(&self, context: &str) -> MessageKey {
        MessageKey::new(context, &self.source, self.comment.as_deref())
    }

    /// Only finished translations count; unfinished text is never used.
    pub fn is_finished(&self) -> bool {
        self.translation.status == TranslationStatus::Finished
    }

    /// Vanished and obsolete messages are kept only for translator reference.
    pub fn is_active(&self) -> bool {
        !matches!(
            self.translation.status,
            TranslationStatus::Vanished | TranslationStatus::Obsolete
        )
    }
}

/// Child element of `<message>` that has no dedicated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageExtra {
    pub name: String,
    pub text: String,
}

impl MessageExtra {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Joins the `<lengthvariant>` texts of one translation, longest first.
pub const LENGTH_VARIANT_SEPARATOR: char = '\u{2762}';

/// Length variants of a translation text; plain text is a single variant.
pub fn length_variants(text: &str) -> impl Iterator<Item = &str> {
    text.split(LENGTH_VARIANT_SEPARATOR)
}

/// The first (primary) length variant, used for lookups.
pub fn primary_variant(text: &str) -> &str {
    length_variants(text).next().unwrap_or(text)
}

/// Review state of a translation, from the `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationStatus {
    /// No `type` attribute.
    Finished,
    Unfinished,
    Vanished,
    Obsolete,
}

impl TranslationStatus {
    /// Parse the `type` attribute value.
    pub fn from_attribute(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(Self::Unfinished),
            "vanished" => Some(Self::Vanished),
            "obsolete" => Some(Self::Obsolete),
            _ => None,
        }
    }

    /// Attribute value to write, `None` for finished translations.
    pub fn as_attribute(&self) -> Option<&'static str> {
        match self {
            Self::Finished => None,
            Self::Unfinished => Some("unfinished"),
            Self::Vanished => Some("vanished"),
            Self::Obsolete => Some("obsolete"),
        }
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished => write!(f, "finished"),
            Self::Unfinished => write!(f, "unfinished"),
            Self::Vanished => write!(f, "vanished"),
            Self::Obsolete => write!(f, "obsolete"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub status: TranslationStatus,
    pub value: TranslationValue,
}

impl Translation {
    pub fn finished(text: impl Into<String>) -> Self {
        Self {
            status: TranslationStatus::Finished,
            value: TranslationValue::Single(text.into()),
        }
    }

    pub fn unfinished(text: impl Into<String>) -> Self {
        Self {
            status: TranslationStatus::Unfinished,
            value: TranslationValue::Single(text.into()),
        }
    }

    /// True when there is no text at all (every numerus form empty).
    pub fn is_empty(&self) -> bool {
        match &self.value {
            TranslationValue::Single(text) => text.is_empty(),
            TranslationValue::Numerus(forms) => forms.iter().all(String::is_empty),
        }
    }
}

/// Translation text: a single string, or one string per plural form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TranslationValue {
    Single(String),
    Numerus(Vec<String>),
}

impl TranslationValue {
    /// All text variants, one for single translations.
    pub fn texts(&self) -> &[String] {
        match self {
            Self::Single(text) => std::slice::from_ref(text),
            Self::Numerus(forms) => forms,
        }
    }
}

/// Lookup key of a message: `(context, source, comment)`.
///
/// A missing comment and an empty comment are the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageKey {
    pub context: String,
    pub source: String,
    pub comment: String,
}

impl MessageKey {
    pub fn new(context: &str, source: &str, comment: Option<&str>) -> Self {
        Self {
            context: context.to_string(),
            source: source.to_string(),
            comment: comment.unwrap_or_default().to_string(),
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.comment.is_empty() {
            write!(f, "{}::\"{}\"", self.context, self.source)
        } else {
            write!(f, "{}::\"{}\" ({})", self.context, self.source, self.comment)
        }
    }
}

/// A catalog together with the file it was read from.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub file_path: String,
    pub catalog: Catalog,
}
