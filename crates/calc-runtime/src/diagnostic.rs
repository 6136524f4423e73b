//! Diagnostic system for errors
//!
//! Syntax and evaluation errors are both reported through the unified
//! [`Diagnostic`] type, so drivers format every failure the same way, as
//! human-readable text with a caret snippet or as JSON.

pub mod error_codes;

use crate::parser::SyntaxError;
use crate::span::Span;
use crate::value::EvalError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic schema version
pub const DIAG_VERSION: u32 = 1;

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    /// The statement was rejected
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Diagnostic schema version
    pub diag_version: u32,
    /// Severity level
    pub level: DiagnosticLevel,
    /// Error code (e.g., "CALC1001")
    pub code: String,
    /// Main diagnostic message
    pub message: String,
    /// Column number (1-based, in characters)
    pub column: usize,
    /// Length of error span (in characters)
    pub length: usize,
    /// The offending input line, without its terminator
    pub snippet: String,
    /// Short label for caret range
    pub label: String,
    /// Suggested fix
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic with code
    ///
    /// Help text is filled in from the error code registry when available.
    pub fn error_with_code(code: impl Into<String>, message: impl Into<String>, span: Span) -> Self {
        let code = code.into();
        let help = error_codes::help_for(&code).map(str::to_string);
        Self {
            diag_version: DIAG_VERSION,
            level: DiagnosticLevel::Error,
            code,
            message: message.into(),
            column: span.start + 1,
            length: span.len(),
            snippet: String::new(),
            label: String::new(),
            help,
        }
    }

    /// Build a diagnostic for a rejected line
    pub fn from_syntax_error(err: &SyntaxError, source: &str) -> Self {
        let (code, label) = match err {
            SyntaxError::UnexpectedCharacter { .. } => {
                (error_codes::UNEXPECTED_CHARACTER, "not valid here")
            }
            SyntaxError::UnexpectedEnd { .. } => {
                (error_codes::UNEXPECTED_END, "expected a number or variable")
            }
            SyntaxError::NumberTooLarge { .. } => {
                (error_codes::NUMBER_TOO_LARGE, "does not fit in 64 bits")
            }
            SyntaxError::InvalidAssignmentTarget { .. } => {
                (error_codes::INVALID_ASSIGNMENT_TARGET, "not a variable")
            }
        };
        Self::error_with_code(code, err.to_string(), err.span())
            .with_source(source, err.span())
            .with_label(label)
    }

    /// Build a diagnostic for a statement that failed to evaluate
    pub fn from_eval_error(err: &EvalError, source: &str) -> Self {
        let (code, label) = match err {
            EvalError::UnboundVariable { .. } => {
                (error_codes::UNBOUND_VARIABLE, "never assigned")
            }
            EvalError::DivisionByZero { .. } => {
                (error_codes::DIVISION_BY_ZERO, "divisor is zero")
            }
            EvalError::Overflow { .. } => (error_codes::ARITHMETIC_OVERFLOW, "overflows"),
        };
        Self::error_with_code(code, err.to_string(), err.span())
            .with_source(source, err.span())
            .with_label(label)
    }

    /// Attach the source line and recompute the location in characters
    ///
    /// The snippet stops at the first line break, so a span pointing at an
    /// embedded terminator lands just past the end of the snippet.
    pub fn with_source(mut self, source: &str, span: Span) -> Self {
        let line = source
            .find(&['\r', '\n'][..])
            .map_or(source, |end| &source[..end]);
        let start = span.start.min(line.len());
        let end = span.end.min(line.len()).max(start);
        self.column = line[..start].chars().count() + 1;
        self.length = line[start..end].chars().count();
        self.snippet = line.to_string();
        self
    }

    /// Set the label (caret description)
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Format as human-readable string
    pub fn to_human_string(&self) -> String {
        let mut output = String::new();

        // Header: error[CALC1001]: unexpected character ' '
        output.push_str(&format!("{}[{}]: {}\n", self.level, self.code, self.message));
        output.push_str(&format!("  --> column {}\n", self.column));

        if !self.snippet.is_empty() {
            output.push_str("   |\n");
            output.push_str(&format!("   | {}\n", self.snippet));

            // Zero-width spans (end of input) still get one caret
            let padding = " ".repeat(self.column - 1);
            let carets = "^".repeat(self.length.max(1));
            output.push_str(&format!("   | {}{}", padding, carets));
            if !self.label.is_empty() {
                output.push_str(&format!(" {}", self.label));
            }
            output.push('\n');
        }

        if let Some(help) = &self.help {
            output.push_str(&format!("   = help: {}\n", help));
        }

        output
    }

    /// Format as JSON string
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Format as compact JSON string
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.level, self.code, self.message)
    }
}
