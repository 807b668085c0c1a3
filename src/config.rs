//! Configuration for path rendering

use crate::format::{NumberFormat, MAX_PRECISION};

/// Configuration options for `d` string output
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderConfig {
    /// Decimal places for arguments; `None` keeps the shortest exact form.
    /// Values above [`MAX_PRECISION`] are treated as [`MAX_PRECISION`].
    pub precision: Option<usize>,

    /// Reject wrong arities and non-finite arguments before rendering
    pub strict: bool,
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Round arguments to `precision` decimals, at most [`MAX_PRECISION`]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision.min(MAX_PRECISION));
        self
    }

    /// Write arguments in their shortest exact form
    pub fn without_precision(mut self) -> Self {
        self.precision = None;
        self
    }

    /// Set whether validation runs before rendering
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub(crate) fn number_format(&self) -> NumberFormat {
        NumberFormat::from_precision(self.precision)
    }
}
