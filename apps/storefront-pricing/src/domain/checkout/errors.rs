//! Checkout errors.

use thiserror::Error;

use crate::domain::shared::PricingError;

/// Errors raised while totalling a cart or checking a displayed overview.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// One of the cart item prices could not be read.
    #[error("Cart item #{index} has an invalid price: {source}")]
    InvalidItemPrice {
        /// Zero-based position of the item in the cart.
        index: usize,
        /// The underlying pricing failure.
        source: PricingError,
    },

    /// A price outside the cart could not be read.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// A summary label carried no `$` amount.
    #[error("No currency amount found in label '{label}'")]
    LabelWithoutAmount {
        /// The label text as displayed.
        label: String,
    },

    /// A summary label shows fractions of a cent.
    #[error("Label '{label}' shows more than two decimal places")]
    SubCentAmount {
        /// The label text as displayed.
        label: String,
    },

    /// A displayed amount differs from the computed one.
    #[error("{field} mismatch: expected {expected}, page shows '{displayed}'")]
    Mismatch {
        /// Which summary line differs.
        field: &'static str,
        /// The formatted amount that should have been shown.
        expected: String,
        /// The label text as displayed.
        displayed: String,
    },
}
