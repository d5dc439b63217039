//! Checking a displayed checkout overview against computed totals.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::pricing::format_money;
use crate::domain::shared::{Money, PricingError};

use super::errors::CheckoutError;
use super::summary::CheckoutSummary;

/// Summary lines as scraped from the checkout overview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayedOverview {
    /// Item total line, e.g. `"Item total: $29.99"`.
    pub item_total: String,
    /// Tax line, e.g. `"Tax: $2.40"`.
    pub tax: String,
    /// Total line, e.g. `"Total: $32.39"`.
    pub total: String,
}

/// Verify that every displayed line shows the computed amount.
///
/// Each label's `$` amount is extracted and compared, after formatting,
/// with the expected amount. The first differing line is reported.
pub fn verify_overview(
    summary: &CheckoutSummary,
    displayed: &DisplayedOverview,
) -> Result<(), CheckoutError> {
    let lines = [
        ("item total", summary.item_total(), &displayed.item_total),
        ("tax", summary.tax(), &displayed.tax),
        ("total", summary.total(), &displayed.total),
    ];

    for (field, expected, label) in lines {
        let expected = format_money(expected);
        let shown = format_money(extract_label_amount(label)?);
        if shown != expected {
            tracing::warn!(field, %expected, label = %label, "Checkout overview mismatch");
            return Err(CheckoutError::Mismatch {
                field,
                expected,
                displayed: label.clone(),
            });
        }
    }

    tracing::debug!(items = summary.item_count(), "Checkout overview verified");
    Ok(())
}

/// Pull the `$` amount out of a label such as `"Total: $1,032.39"`.
///
/// Unlike price parsing, labels may carry thousands separators. A currency
/// label never shows more than two decimals, so `"$29.994"` is rejected.
pub fn extract_label_amount(label: &str) -> Result<Money, CheckoutError> {
    let Some(captures) = label_amount_pattern().captures(label) else {
        return Err(CheckoutError::LabelWithoutAmount {
            label: label.to_string(),
        });
    };
    let Some(number) = captures.get(1) else {
        return Err(CheckoutError::LabelWithoutAmount {
            label: label.to_string(),
        });
    };

    let digits = number.as_str().replace(',', "");
    if digits
        .split_once('.')
        .is_some_and(|(_, fraction)| fraction.len() > 2)
    {
        return Err(CheckoutError::SubCentAmount {
            label: label.to_string(),
        });
    }
    Decimal::from_str(&digits)
        .map(Money::new)
        .map_err(|e| CheckoutError::Pricing(PricingError::invalid_input(label, e.to_string())))
}

#[allow(clippy::expect_used)] // Regex is a compile-time constant
fn label_amount_pattern() -> &'static Regex {
    static LABEL_AMOUNT: OnceLock<Regex> = OnceLock::new();
    LABEL_AMOUNT.get_or_init(|| {
        Regex::new(r"\$(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)")
            .expect("label amount regex is valid")
    })
}
