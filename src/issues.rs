//! Issue types for catalog validation results.
//!
//! Each issue is self-contained with all information the reporter needs to
//! display it: where it is, what is wrong and how severe it is.

use enum_dispatch::enum_dispatch;

use crate::core::{MessageContext, TranslationStatus};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    Unfinished,
    EmptyTranslation,
    NumerusCount,
    Duplicate,
    DuplicateContext,
    Placeholder,
    Obsolete,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::EmptyTranslation => write!(f, "empty-translation"),
            Rule::NumerusCount => write!(f, "numerus-count"),
            Rule::Duplicate => write!(f, "duplicate"),
            Rule::DuplicateContext => write!(f, "duplicate-context"),
            Rule::Placeholder => write!(f, "placeholder"),
            Rule::Obsolete => write!(f, "obsolete"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types - Messages (MessageContext)
// ============================================================

/// Active message whose translation is still marked `unfinished`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub context: MessageContext,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// Finished message with no text, or with an empty numerus form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyTranslationIssue {
    pub context: MessageContext,
    /// Index of the empty numerus form, `None` for plain messages.
    pub form: Option<usize>,
}

impl EmptyTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::EmptyTranslation
    }
}

/// Numerus message with a different number of forms than its language needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumerusCountIssue {
    pub context: MessageContext,
    pub language: String,
    pub expected: usize,
    pub found: usize,
}

impl NumerusCountIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::NumerusCount
    }
}

/// Message shadowed by a later message with the same `(context, source, comment)` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateIssue {
    pub context: MessageContext,
    /// Line of the next message with the same key.
    pub overridden_at: usize,
}

impl DuplicateIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Duplicate
    }
}

/// `%1`, `%L1` or `%n` markers that differ between source and translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderIssue {
    pub context: MessageContext,
    /// Markers in the source that the translation drops.
    pub missing: Vec<String>,
    /// Markers in the translation that the source does not have.
    pub extra: Vec<String>,
}

impl PlaceholderIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Placeholder
    }
}

/// Message kept only for reference (`vanished` or `obsolete`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObsoleteIssue {
    pub context: MessageContext,
    pub status: TranslationStatus,
}

impl ObsoleteIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Obsolete
    }
}

// ============================================================
// Issue Types - Catalog level
// ============================================================

/// Context name that appears more than once in a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateContextIssue {
    pub file_path: String,
    pub line: usize,
    pub name: String,
    pub first_line: usize,
}

impl DuplicateContextIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::DuplicateContext
    }
}

/// File could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    /// 1-based `(line, column)`, when the parser knows it.
    pub position: Option<(usize, usize)>,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A catalog issue found during validation.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Unfinished(UnfinishedIssue),
    EmptyTranslation(EmptyTranslationIssue),
    NumerusCount(NumerusCountIssue),
    Duplicate(DuplicateIssue),
    DuplicateContext(DuplicateContextIssue),
    Placeholder(PlaceholderIssue),
    Obsolete(ObsoleteIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message inside a catalog.
    Message(&'a MessageContext),
    /// A position in a file that is not tied to a single message.
    At {
        path: &'a str,
        line: usize,
        col: usize,
    },
    /// File-level only (no position known).
    File { path: &'a str },
}

impl<'a> ReportLocation<'a> {
    /// `(path, line, col)`, with `0` for unknown line and column.
    pub fn parts(&self) -> (&'a str, usize, usize) {
        match *self {
            ReportLocation::Message(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
            ReportLocation::At { path, line, col } => (path, line, col),
            ReportLocation::File { path } => (path, 0, 0),
        }
    }
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards the calls from
/// the `Issue` enum without boxing.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (source text, context name, error).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("in {}", self.context.display_key()))
    }
}

impl Report for EmptyTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        match self.form {
            Some(form) => Some(format!(
                "in {}, numerus form {} is empty",
                self.context.display_key(),
                form + 1
            )),
            None => Some(format!("in {}", self.context.display_key())),
        }
    }

    fn hint(&self) -> Option<&str> {
        Some("lookups fall back to the source text")
    }
}

impl Report for NumerusCountIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "in {}, {} expects {} numerus form(s), found {}",
            self.context.display_key(),
            self.language,
            self.expected,
            self.found
        ))
    }
}

impl Report for DuplicateIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "in {}, redefined at line {}",
            self.context.display_key(),
            self.overridden_at
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("lookups use the last definition")
    }
}

impl Report for PlaceholderIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing {}", self.missing.join(", ")));
        }
        if !self.extra.is_empty() {
            parts.push(format!("unexpected {}", self.extra.join(", ")));
        }
        Some(format!(
            "in {}, {}",
            self.context.display_key(),
            parts.join("; ")
        ))
    }
}

impl Report for ObsoleteIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "in {}, marked {}",
            self.context.display_key(),
            self.status
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("run lupdate with -no-obsolete to drop it")
    }
}

impl Report for DuplicateContextIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::At {
            path: &self.file_path,
            line: self.line,
            col: 1,
        }
    }

    fn message(&self) -> String {
        self.name.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("context first defined at line {}", self.first_line))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        match self.position {
            Some((line, col)) => ReportLocation::At {
                path: &self.file_path,
                line,
                col,
            },
            None => ReportLocation::File {
                path: &self.file_path,
            },
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let self_loc = self.location();
        let other_loc = other.location();
        let (a_path, a_line, a_col) = self_loc.parts();
        let (b_path, b_line, b_col) = other_loc.parts();

        // Sort by: file_path, line, col, rule, message
        a_path
            .cmp(b_path)
            .then_with(|| a_line.cmp(&b_line))
            .then_with(|| a_col.cmp(&b_col))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
