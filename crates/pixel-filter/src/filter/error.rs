//! Error type for parsing filter names.

use std::fmt;

/// A filter name that does not match any [`Filter`](super::Filter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFilterError {
    name: String,
}

impl ParseFilterError {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// The rejected input.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseFilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown filter: {:?}", self.name)
    }
}

impl std::error::Error for ParseFilterError {}
