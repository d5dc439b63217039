//! Domain errors for price calculations.

use thiserror::Error;

/// Errors raised while turning a caller-supplied price into a quote.
///
/// There is exactly one kind: the input could not be interpreted as a
/// non-negative decimal amount. It is never recovered locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// The price was missing, empty, unparseable or negative.
    #[error("Invalid price input '{input}': {reason}")]
    InvalidInput {
        /// The offending input as received (`<missing>` for the null case).
        input: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl PricingError {
    /// Build an `InvalidInput` error.
    pub fn invalid_input(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// The rejected input text.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidInput { input, .. } => input,
        }
    }
}
