//! Domain layer - pricing and checkout logic with no I/O.

pub mod checkout;
pub mod pricing;
pub mod shared;
