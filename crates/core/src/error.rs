use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Optional file path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            file: None,
            line,
            column,
        }
    }

    /// Create a source location with file information
    pub fn with_file(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: Some(file.into()),
            line,
            column,
        }
    }

    /// Start of an unnamed document, used when a node carries no position.
    pub fn unknown() -> Self {
        Self::new(0, 0)
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.file, self.line) {
            (Some(file), 0) => write!(f, "{}", file),
            (None, 0) => write!(f, "<unknown>"),
            (Some(file), _) => write!(f, "{}:{}:{}", file, self.line, self.column),
            (None, _) => write!(f, "{}:{}", self.line, self.column),
        }
    }
}

/// Errors raised while turning authored content into a render tree.
#[derive(Debug, Error)]
pub enum ContentError {
    /// markdown-rs parser error surfaced through the adapter.
    #[error("Parse error at {location}: {message}")]
    Parse {
        /// Error message
        message: String,
        /// Source location
        location: SourceLocation,
    },
    /// Authored tag does not have the shape its component requires.
    #[error("Invalid <{tag}> at {location}: {message}")]
    Validation {
        /// Tag name as written by the author
        tag: String,
        /// Error message
        message: String,
        /// Source location
        location: SourceLocation,
    },
    /// A tab selection named a key that no tab in the group carries.
    #[error("No tab with value \"{0}\"")]
    UnknownTab(String),
    /// JSON document tree could not be decoded.
    #[error("Invalid document tree: {0}")]
    Decode(#[from] serde_json::Error),
    /// Internal logic error (unexpected state).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ContentError {
    /// Create a parse error with location
    pub fn parse_error(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::Parse {
            message: message.into(),
            location: SourceLocation::new(line, column),
        }
    }

    /// Create a validation error for `tag` at `location`
    pub fn validation(
        tag: impl Into<String>,
        message: impl Into<String>,
        location: SourceLocation,
    ) -> Self {
        Self::Validation {
            tag: tag.into(),
            message: message.into(),
            location,
        }
    }

    /// Returns true for authoring-shape violations that lenient rendering may skip.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Source location of the error, when one is known.
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::Parse { location, .. } | Self::Validation { location, .. } => Some(location),
            _ => None,
        }
    }
}

/// Recoverable error information
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecoverableError {
    /// Error message
    pub message: String,
    /// Source location
    pub location: SourceLocation,
    /// Error severity
    pub severity: ErrorSeverity,
}

/// Error severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorSeverity {
    /// Error that was recovered from
    Error,
    /// Warning that doesn't prevent rendering
    Warning,
}

impl RecoverableError {
    /// Create a new recoverable error
    pub fn error(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            message: message.into(),
            location,
            severity: ErrorSeverity::Error,
        }
    }

    /// Create a new warning
    pub fn warning(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            message: message.into(),
            location,
            severity: ErrorSeverity::Warning,
        }
    }
}

impl From<&ContentError> for RecoverableError {
    fn from(err: &ContentError) -> Self {
        let location = err.location().cloned().unwrap_or_else(SourceLocation::unknown);
        Self::error(err.to_string(), location)
    }
}

impl std::fmt::Display for RecoverableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let severity = match self.severity {
            ErrorSeverity::Error => "error",
            ErrorSeverity::Warning => "warning",
        };
        write!(f, "{} at {}: {}", severity, self.location, self.message)
    }
}

/// Diagnostics collected during one lenient render pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenderDiagnostics {
    /// Non-fatal warnings (ignored props and similar)
    pub warnings: Vec<RecoverableError>,
    /// Shape violations that were skipped instead of aborting the render
    pub errors: Vec<RecoverableError>,
}

impl RenderDiagnostics {
    /// Create a new empty diagnostics collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a skipped error
    pub fn add_error(&mut self, error: RecoverableError) {
        self.errors.push(error);
    }

    /// Add a warning with location
    pub fn add_warning_at(&mut self, message: impl Into<String>, location: SourceLocation) {
        self.warnings.push(RecoverableError::warning(message, location));
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get total count of all diagnostics
    pub fn count(&self) -> usize {
        self.warnings.len() + self.errors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_display_variants() {
        assert_eq!(SourceLocation::new(3, 7).to_string(), "3:7");
        assert_eq!(
            SourceLocation::with_file("docs/index.mdx", 3, 7).to_string(),
            "docs/index.mdx:3:7"
        );
        assert_eq!(SourceLocation::unknown().to_string(), "<unknown>");
    }

    #[test]
    fn validation_error_names_tag_and_location() {
        let err = ContentError::validation("Card", "missing title", SourceLocation::new(4, 1));
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Invalid <Card> at 4:1: missing title");
    }

    #[test]
    fn recoverable_from_content_error_keeps_location() {
        let err = ContentError::validation("Tabs", "no tabs", SourceLocation::new(9, 2));
        let recovered = RecoverableError::from(&err);
        assert_eq!(recovered.severity, ErrorSeverity::Error);
        assert_eq!(recovered.location, SourceLocation::new(9, 2));
        assert!(recovered.to_string().starts_with("error at 9:2"));
    }

    #[test]
    fn diagnostics_count() {
        let mut diagnostics = RenderDiagnostics::new();
        assert_eq!(diagnostics.count(), 0);
        diagnostics.add_warning_at("cols ignored", SourceLocation::new(1, 1));
        diagnostics.add_error(RecoverableError::error("boom", SourceLocation::new(2, 1)));
        assert!(diagnostics.has_warnings());
        assert!(diagnostics.has_errors());
        assert_eq!(diagnostics.count(), 2);
    }
}
