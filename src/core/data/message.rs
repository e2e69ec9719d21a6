/// Position information in a translation catalog (`.ts` file).
///
/// Represents a specific location in a catalog file, used for error reporting
/// when there are issues with a message or context.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    /// Path to the catalog file (e.g., "./nls/qt_ka.ts").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col: 1,
        }
    }
}

/// A message as seen by reporting: where it is and which key it has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: MessageLocation,
    /// Name of the enclosing `<context>` (e.g., "QFileDialog").
    pub context_name: String,
    /// The English source text.
    pub source: String,
    /// Disambiguating comment, if any.
    pub comment: Option<String>,
}

impl MessageContext {
    pub fn new(
        location: MessageLocation,
        context_name: impl Into<String>,
        source: impl Into<String>,
        comment: Option<String>,
    ) -> Self {
        Self {
            location,
            context_name: context_name.into(),
            source: source.into(),
            comment,
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }

    /// Human readable key: `Context` or `Context (comment)`.
    pub fn display_key(&self) -> String {
        match &self.comment {
            Some(comment) if !comment.is_empty() => {
                format!("{} ({})", self.context_name, comment)
            }
            _ => self.context_name.clone(),
        }
    }
}
