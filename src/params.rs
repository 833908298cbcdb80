/// How strictly figures are checked when they enter a [`Registry`](crate::Registry).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    /// Accept any geometry. Degenerate input is logged and stored as-is.
    #[default]
    Permissive,
    /// Reject degenerate or mis-shaped figures with a
    /// [`GeometryError`](crate::error::GeometryError).
    Strict,
}

/// Parameters controlling evaluation and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalParams {
    /// Validation applied on figure insertion.
    pub validation: Validation,
    /// Decimal places used in descriptions and summaries.
    pub precision: usize,
}

/// Decimal places used when no precision is configured.
pub const DEFAULT_PRECISION: usize = 5;

impl Default for EvalParams {
    fn default() -> Self {
        Self {
            validation: Validation::Permissive,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl EvalParams {
    /// Sets the validation mode.
    #[must_use]
    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Sets the number of displayed decimal places.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}
