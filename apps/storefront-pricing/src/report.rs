//! Price reports for the command-line tool.

use std::fmt::Write as _;

use serde::Serialize;

use crate::domain::checkout::{CheckoutError, CheckoutSummary, OverviewLabels};
use crate::domain::pricing::{FormattedQuote, TaxBreakdown, compute_tax};

/// One priced cart item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemReport {
    /// The price exactly as given.
    pub input: String,
    /// Raw amounts.
    pub breakdown: TaxBreakdown,
    /// Display strings.
    pub formatted: FormattedQuote,
}

/// Per-item quotes plus the cart summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingReport {
    /// Items in input order.
    pub items: Vec<ItemReport>,
    /// Raw cart totals.
    pub summary: TaxBreakdown,
    /// Overview lines for the cart.
    pub labels: OverviewLabels,
}

impl PricingReport {
    /// Price every input and total the cart.
    pub fn build(prices: &[String]) -> Result<Self, CheckoutError> {
        let items = prices
            .iter()
            .enumerate()
            .map(|(index, price)| {
                let quote = compute_tax(price)
                    .map_err(|source| CheckoutError::InvalidItemPrice { index, source })?;
                Ok(ItemReport {
                    input: price.clone(),
                    breakdown: quote.breakdown(),
                    formatted: quote.formatted(),
                })
            })
            .collect::<Result<Vec<_>, CheckoutError>>()?;

        let summary =
            CheckoutSummary::from_prices(items.iter().map(|item| item.breakdown.base_amount))?;
        Ok(Self {
            items,
            summary: summary.quote().breakdown(),
            labels: summary.expected_labels(),
        })
    }

    /// Human-readable rendering.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (i, item) in self.items.iter().enumerate() {
            let _ = writeln!(
                out,
                "#{:<3} {:>12}  tax {:>10}  total {:>12}",
                i + 1,
                item.input.trim(),
                item.formatted.tax,
                item.formatted.total
            );
        }
        if !self.items.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", self.labels.item_total);
        let _ = writeln!(out, "{}", self.labels.tax);
        let _ = writeln!(out, "{}", self.labels.total);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn prices(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_build_report() {
        let report = PricingReport::build(&prices(&["$10.00", "20", "$5.50"])).unwrap();
        assert_eq!(report.items.len(), 3);
        assert_eq!(report.items[0].formatted.tax, "$0.80");
        assert_eq!(report.summary.total_amount.amount(), dec!(38.34));
        assert_eq!(report.labels.tax, "Tax: $2.84");
    }

    #[test]
    fn test_build_report_invalid_item() {
        let err = PricingReport::build(&prices(&["$10.00", "ten"])).unwrap_err();
        assert!(matches!(err, CheckoutError::InvalidItemPrice { index: 1, .. }));
        assert!(err.to_string().contains("ten"));
    }

    #[test]
    fn test_build_report_overflowing_cart() {
        let big = "$50000000000000000000000000000".to_string();
        let err = PricingReport::build(&[big.clone(), big]).unwrap_err();
        assert!(matches!(err, CheckoutError::InvalidItemPrice { index: 1, .. }));
    }

    #[test]
    fn test_render_text() {
        let report = PricingReport::build(&prices(&["$100"])).unwrap();
        let text = report.render_text();
        assert!(text.contains("tax      $8.00"));
        assert!(text.contains("Total: $108.00"));
    }

    #[test]
    fn test_render_empty_cart() {
        let report = PricingReport::build(&[]).unwrap();
        assert_eq!(
            report.render_text(),
            "Item total: $0.00\nTax: $0.00\nTotal: $0.00\n"
        );
    }

    #[test]
    fn test_report_serializes() {
        let report = PricingReport::build(&prices(&["$29.99"])).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["items"][0]["formatted"]["total"], "$32.39");
        assert_eq!(json["labels"]["item_total"], "Item total: $29.99");
    }
}
