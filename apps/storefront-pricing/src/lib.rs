// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Storefront Pricing - Rust Core Library
//!
//! Price, tax and checkout-total calculations backing the storefront
//! end-to-end suite. Prices scraped from the storefront (`"$29.99"`) or
//! supplied as numbers are quoted with the fixed 8% sales tax, in decimal
//! arithmetic, and formatted as en-US USD strings only at the end.
//!
//! # Layers
//!
//! - **Domain**: pure logic, no I/O
//!   - `shared`: `Money` value object, `PricingError`
//!   - `pricing`: price parsing, `compute_tax`, `format_currency`
//!   - `checkout`: multi-item `CheckoutSummary`, overview verification
//! - **Config**: YAML configuration with env interpolation
//! - **Telemetry**: tracing subscriber setup
//! - **Report**: rendering for the `storefront-pricing` binary

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - pricing and checkout logic.
pub mod domain;

/// Configuration loading and validation.
pub mod config;

/// Report rendering for the command-line tool.
pub mod report;

/// Tracing subscriber setup.
pub mod telemetry;

// Domain re-exports
pub use domain::checkout::{
    CheckoutError, CheckoutSummary, DisplayedOverview, OverviewLabels, verify_overview,
};
pub use domain::pricing::{
    FormattedQuote, PriceInput, PriceQuote, TAX_RATE, TaxBreakdown, compute_tax,
    format_currency, format_money, parse_price,
};
pub use domain::shared::{Money, PricingError};
