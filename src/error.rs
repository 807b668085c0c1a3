//! Error types for strict validation

use thiserror::Error;

/// A command that violates the strict rendering policy
///
/// Only produced by [`crate::PathBuilder::validate`]; building a path never
/// fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("command #{index} '{code}' expects {expected} arguments, got {found}")]
    Arity {
        index: usize,
        code: char,
        expected: usize,
        found: usize,
    },

    #[error("command #{index} '{code}' has non-finite argument {value} at position {position}")]
    NonFinite {
        index: usize,
        code: char,
        position: usize,
        value: f64,
    },
}
