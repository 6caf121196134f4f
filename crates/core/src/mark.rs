//! Source positions carried by nodes and errors.
//!
//! A [`Mark`] is diagnostic metadata only: it never takes part in node
//! equality, hashing or ordering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based line/column position in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mark {
    pub line: u32,
    pub column: u32,
}

impl Mark {
    pub fn new(line: u32, column: u32) -> Self {
        Mark { line, column }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
