//! Shared Domain Types
//!
//! Value objects, currency formatting and errors shared across the pricing
//! and checkout contexts.

pub mod currency;
pub mod errors;
pub mod value_objects;

pub use currency::{CURRENCY_SYMBOL, format_currency, format_money};
pub use errors::PricingError;
pub use value_objects::Money;
