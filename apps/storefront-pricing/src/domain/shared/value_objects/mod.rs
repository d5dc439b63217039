//! Shared Value Objects
//!
//! Immutable domain types compared by value, not identity.

mod money;

pub use money::{CURRENCY_SCALE, Money};
