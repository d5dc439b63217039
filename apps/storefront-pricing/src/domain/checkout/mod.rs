//! Checkout
//!
//! Cart totals and verification of the checkout overview the storefront
//! renders ("Item total", "Tax", "Total").

mod errors;
mod summary;
mod verification;

pub use errors::CheckoutError;
pub use summary::{CheckoutSummary, ITEM_TOTAL_LABEL, OverviewLabels, TAX_LABEL, TOTAL_LABEL};
pub use verification::{DisplayedOverview, extract_label_amount, verify_overview};
