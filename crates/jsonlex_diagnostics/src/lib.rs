//! jsonlex_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! The scanner reports malformed input in-band as `Undefined` tokens. This
//! crate gives those failures a code, a category and a readable message so
//! that tools built on the scanner can report them uniformly.

use jsonlex_core::text::TextSpan;
use std::fmt;

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g., 1001).
    pub code: u32,
    /// The category of this diagnostic.
    pub category: DiagnosticCategory,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The file path where this diagnostic occurred, if any.
    pub file: Option<String>,
    /// The source text span where this diagnostic occurred, if any.
    pub span: Option<TextSpan>,
    /// The resolved message text.
    pub message_text: String,
    /// The diagnostic code.
    pub code: u32,
    /// The category.
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a new diagnostic without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            span: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Create a new diagnostic at a span of an unnamed source.
    pub fn at(span: TextSpan, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            span: Some(span),
            ..Self::new(message, args)
        }
    }

    /// Attach a file name to this diagnostic.
    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Whether this is an error diagnostic.
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}", file)?;
            if let Some(span) = self.span {
                write!(f, "({})", span.start)?;
            }
            write!(f, ": ")?;
        } else if let Some(span) = self.span {
            write!(f, "({}): ", span.start)?;
        }
        write!(
            f,
            "{} J{}: {}",
            self.category, self.code, self.message_text
        )
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// A collection of diagnostics accumulated while checking one or more sources.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.category == DiagnosticCategory::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.category == DiagnosticCategory::Error)
            .count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }
}

impl IntoIterator for DiagnosticCollection {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
    }

    // ========================================================================
    // Lexical errors (1000-1099)
    // ========================================================================
    pub const UNEXPECTED_CHARACTER_0: DiagnosticMessage = diag!(1001, Error, "Unexpected character '{0}'.");
    pub const UNEXPECTED_END_OF_INPUT: DiagnosticMessage = diag!(1002, Error, "Unexpected end of input.");
    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage = diag!(1003, Error, "Unterminated string literal.");
    pub const LINE_BREAK_IN_STRING_LITERAL: DiagnosticMessage = diag!(1004, Error, "String literal cannot contain an unescaped line break.");
    pub const UNEXPECTED_DECIMAL_POINT: DiagnosticMessage = diag!(1005, Error, "Unexpected decimal point in number.");
    pub const UNEXPECTED_EXPONENT_MARKER: DiagnosticMessage = diag!(1006, Error, "Number cannot have more than one exponent.");
    pub const INVALID_NUMBER_TERMINATOR_0: DiagnosticMessage = diag!(1007, Error, "Number cannot be followed by '{0}'.");
    pub const INVALID_LITERAL_TERMINATOR_0: DiagnosticMessage = diag!(1008, Error, "Literal '{0}' must be followed by whitespace or punctuation.");
    pub const NUMBER_MUST_END_WITH_DIGIT: DiagnosticMessage = diag!(1009, Error, "Number must end with a digit.");

    // ========================================================================
    // Lexical warnings (1100-1199)
    // ========================================================================
    pub const NON_STANDARD_NUMBER_0: DiagnosticMessage = diag!(1101, Warning, "Number '{0}' is not in standard JSON form.");
}
