//! Line/column source positions.
//!
//! Diagnostics produced by the type kernel carry a [`Location`] so the
//! caller can point at the expression whose metatable was malformed.

use serde::Serialize;
use std::fmt;

/// A zero-based line/column position in a source file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rendered one-based, like editors show it.
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// A half-open source range `[begin, end)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Location {
    pub begin: Position,
    pub end: Position,
}

impl Location {
    #[must_use]
    pub const fn new(begin: Position, end: Position) -> Self {
        Self { begin, end }
    }

    /// A location covering a single line segment.
    #[must_use]
    pub const fn on_line(line: u32, begin_column: u32, end_column: u32) -> Self {
        Self {
            begin: Position::new(line, begin_column),
            end: Position::new(line, end_column),
        }
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.begin <= pos && pos < self.end
    }

    /// Smallest location enclosing both `self` and `other`.
    #[must_use]
    pub fn cover(&self, other: Location) -> Location {
        Location {
            begin: self.begin.min(other.begin),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.begin, self.end)
    }
}
