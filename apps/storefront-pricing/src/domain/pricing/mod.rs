//! Price Calculation
//!
//! Two composable operations: a pure numeric tax calculator and a separate
//! currency formatter. Multi-item totals are summed as raw amounts and only
//! formatted at the end.
//!
//! ```
//! use storefront_pricing::domain::pricing::{compute_tax, format_currency};
//!
//! let quote = compute_tax("$100")?;
//! assert_eq!(format_currency(quote.tax_amount().amount()), "$8.00");
//! assert_eq!(format_currency(quote.total_amount().amount()), "$108.00");
//! # Ok::<(), storefront_pricing::PricingError>(())
//! ```

mod price_input;
mod tax;

pub use crate::domain::shared::currency::{CURRENCY_SYMBOL, format_currency, format_money};
pub use price_input::{PriceInput, parse_price};
pub use tax::{FormattedQuote, PriceQuote, TAX_RATE, TaxBreakdown, compute_tax};
