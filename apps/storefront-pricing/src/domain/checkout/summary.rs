//! Multi-item checkout totals.

use serde::Serialize;

use crate::domain::pricing::{PriceInput, PriceQuote, format_money};
use crate::domain::shared::{Money, PricingError};

use super::errors::CheckoutError;

/// Label prefixes used by the storefront checkout overview.
pub const ITEM_TOTAL_LABEL: &str = "Item total: ";
/// Tax line prefix.
pub const TAX_LABEL: &str = "Tax: ";
/// Grand total line prefix.
pub const TOTAL_LABEL: &str = "Total: ";

/// Totals for a whole cart.
///
/// Item prices are summed as raw decimals first; tax is taken on that sum.
/// Per-item formatted strings are never added together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckoutSummary {
    item_count: usize,
    quote: PriceQuote,
}

/// Overview lines the storefront is expected to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewLabels {
    /// e.g. `"Item total: $35.50"`.
    pub item_total: String,
    /// e.g. `"Tax: $2.84"`.
    pub tax: String,
    /// e.g. `"Total: $38.34"`.
    pub total: String,
}

impl CheckoutSummary {
    /// Total a cart from its item prices.
    ///
    /// The first price that fails to resolve, or that pushes the running
    /// total out of range, aborts with its position. A total too large to
    /// tax is reported as [`CheckoutError::Pricing`].
    pub fn from_prices<I>(prices: I) -> Result<Self, CheckoutError>
    where
        I: IntoIterator,
        I::Item: Into<PriceInput>,
    {
        let mut item_count = 0;
        let mut item_total = Money::ZERO;

        for (index, price) in prices.into_iter().enumerate() {
            let amount = price
                .into()
                .resolve()
                .map_err(|source| CheckoutError::InvalidItemPrice { index, source })?;
            item_total = item_total.checked_add(amount).ok_or_else(|| {
                CheckoutError::InvalidItemPrice {
                    index,
                    source: PricingError::invalid_input(
                        amount.amount().to_string(),
                        "cart total too large",
                    ),
                }
            })?;
            item_count += 1;
        }

        let quote = PriceQuote::new(item_total)?;
        tracing::debug!(
            item_count,
            item_total = %item_total.amount(),
            "Computed checkout summary"
        );
        Ok(Self { item_count, quote })
    }

    /// Number of items totalled.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Returns true if the cart was empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Sum of the item prices, before tax.
    #[must_use]
    pub const fn item_total(&self) -> Money {
        self.quote.base_amount()
    }

    /// Tax on the item total.
    #[must_use]
    pub fn tax(&self) -> Money {
        self.quote.tax_amount()
    }

    /// Tax-inclusive total.
    #[must_use]
    pub fn total(&self) -> Money {
        self.quote.total_amount()
    }

    /// Quote for the whole cart.
    #[must_use]
    pub const fn quote(&self) -> &PriceQuote {
        &self.quote
    }

    /// The overview lines the storefront should render for this cart.
    #[must_use]
    pub fn expected_labels(&self) -> OverviewLabels {
        OverviewLabels {
            item_total: format!("{ITEM_TOTAL_LABEL}{}", format_money(self.item_total())),
            tax: format!("{TAX_LABEL}{}", format_money(self.tax())),
            total: format!("{TOTAL_LABEL}{}", format_money(self.total())),
        }
    }
}
