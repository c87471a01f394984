//! Diagnostic types for the type checker.
//!
//! Diagnostics are never thrown. Queries that discover a malformed program
//! push a record into a [`DiagnosticCollector`] and keep going with a
//! best-effort answer.

use crate::position::Location;
use serde::Serialize;

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

/// Stable numeric codes for diagnostics raised by the type kernel.
pub mod diagnostic_codes {
    /// The value attached as a metatable is not a table.
    pub const METATABLE_NOT_A_TABLE: u32 = 1001;
    /// `__index` resolved to something other than a function, table, or `any`.
    pub const INDEX_NOT_FUNCTION_OR_TABLE: u32 = 1002;
}

/// Message templates keyed by the codes above. `{0}` placeholders are
/// filled by [`format_message`].
pub mod diagnostic_messages {
    pub const METATABLE_NOT_A_TABLE: &str = "Metatable was not a table";
    pub const INDEX_NOT_FUNCTION_OR_TABLE: &str =
        "__index should either be a function or table. Got {0}";
}

/// A type-checking diagnostic message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub location: Location,
    pub category: DiagnosticCategory,
    pub code: u32,
    pub message_text: String,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[must_use]
    pub fn error(location: Location, message: impl Into<String>, code: u32) -> Self {
        Self {
            location,
            category: DiagnosticCategory::Error,
            code,
            message_text: message.into(),
        }
    }
}

/// Replace `{0}`, `{1}`, ... in `message` with `args`.
pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

// =============================================================================
// Collector
// =============================================================================

/// Ordered, append-only sink for diagnostics.
///
/// The kernel only ever appends; clearing or draining is the caller's
/// business once a pass is finished.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Record an error with the given code and message.
    pub fn error(&mut self, location: Location, code: u32, message: impl Into<String>) {
        self.push(Diagnostic::error(location, message, code));
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl<'a> IntoIterator for &'a DiagnosticCollector {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;
