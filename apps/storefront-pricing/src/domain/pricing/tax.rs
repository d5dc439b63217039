//! Sales tax quotes.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::price_input::PriceInput;
use crate::domain::shared::{Money, PricingError, format_money};

/// Storefront sales tax rate (8%), applied uniformly to every item.
pub const TAX_RATE: Decimal = dec!(0.08);

/// A pre-tax amount with its tax and tax-inclusive total.
///
/// Only the base amount is stored. Tax and total are recomputed on every
/// access so they can never drift from the base. Construction guarantees
/// the total is representable, so the accessors cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    base_amount: Money,
}

/// Raw numeric view of a quote, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Pre-tax amount.
    pub base_amount: Money,
    /// `base_amount × TAX_RATE`.
    pub tax_amount: Money,
    /// `base_amount + tax_amount`.
    pub total_amount: Money,
}

/// Display strings for a quote, as the checkout overview shows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedQuote {
    /// Formatted tax, e.g. `"$8.00"`.
    pub tax: String,
    /// Formatted total, e.g. `"$108.00"`.
    pub total: String,
}

impl PriceQuote {
    /// Quote an already resolved amount.
    pub fn new(base_amount: Money) -> Result<Self, PricingError> {
        if base_amount.is_negative() {
            return Err(PricingError::invalid_input(
                base_amount.amount().to_string(),
                "price cannot be negative",
            ));
        }
        let total = base_amount
            .checked_mul(TAX_RATE)
            .and_then(|tax| base_amount.checked_add(tax));
        if total.is_none() {
            return Err(PricingError::invalid_input(
                base_amount.amount().to_string(),
                "price too large",
            ));
        }
        Ok(Self { base_amount })
    }

    /// Pre-tax amount.
    #[must_use]
    pub const fn base_amount(&self) -> Money {
        self.base_amount
    }

    /// Tax owed on the base amount.
    #[must_use]
    pub fn tax_amount(&self) -> Money {
        self.base_amount * TAX_RATE
    }

    /// Tax-inclusive total.
    #[must_use]
    pub fn total_amount(&self) -> Money {
        self.base_amount + self.tax_amount()
    }

    /// Raw amounts for callers that keep doing arithmetic.
    #[must_use]
    pub fn breakdown(&self) -> TaxBreakdown {
        TaxBreakdown {
            base_amount: self.base_amount,
            tax_amount: self.tax_amount(),
            total_amount: self.total_amount(),
        }
    }

    /// Currency strings for tax and total.
    #[must_use]
    pub fn formatted(&self) -> FormattedQuote {
        FormattedQuote {
            tax: format_money(self.tax_amount()),
            total: format_money(self.total_amount()),
        }
    }
}

/// Compute tax and tax-inclusive total for a price.
///
/// Accepts any [`PriceInput`] shape: `29.99`, `"29.99"` and `"$29.99"`
/// produce identical quotes. Missing, empty, unparseable or negative input
/// fails with [`PricingError::InvalidInput`].
pub fn compute_tax(price: impl Into<PriceInput>) -> Result<PriceQuote, PricingError> {
    let input = price.into();
    let base_amount = input.resolve().inspect_err(|e| {
        tracing::warn!(error = %e, "Price input rejected");
    })?;
    let quote = PriceQuote::new(base_amount)?;

    tracing::debug!(
        base = %quote.base_amount().amount(),
        tax = %quote.tax_amount().amount(),
        total = %quote.total_amount().amount(),
        "Computed tax quote"
    );
    Ok(quote)
}
