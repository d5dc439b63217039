//! Price Calculator Integration Tests
//!
//! Exercises the public tax and formatting contract: input shapes,
//! invalid input, currency formatting and purity.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use storefront_pricing::{
    CheckoutError, CheckoutSummary, Money, PriceInput, PricingError, TAX_RATE, compute_tax,
    format_currency,
};
use test_case::test_case;

#[test]
fn test_hundred_dollar_quote() {
    let quote = compute_tax("$100").unwrap();

    assert_eq!(quote.tax_amount().amount(), dec!(8));
    assert_eq!(quote.total_amount().amount(), dec!(108));
    assert_eq!(format_currency(quote.tax_amount().amount()), "$8.00");
    assert_eq!(format_currency(quote.total_amount().amount()), "$108.00");
}

#[test]
fn test_tax_rate_is_eight_percent() {
    assert_eq!(TAX_RATE, dec!(0.08));
}

#[test_case(PriceInput::Missing ; "null")]
#[test_case(PriceInput::from("") ; "empty")]
#[test_case(PriceInput::from("abc") ; "letters")]
#[test_case(PriceInput::from("$-3.00") ; "negative text")]
#[test_case(PriceInput::from(f64::NAN) ; "nan")]
fn test_invalid_input(input: PriceInput) {
    let err = compute_tax(input).unwrap_err();
    assert!(matches!(err, PricingError::InvalidInput { .. }));
}

#[test_case(PriceInput::from("$79228162514264337593543950335") ; "decimal max text")]
#[test_case(PriceInput::from("$790000000000000000000000000000") ; "beyond decimal range")]
#[test_case(PriceInput::from(7.5e28) ; "huge float")]
#[test_case(PriceInput::from(1e30) ; "float beyond decimal range")]
#[test_case(PriceInput::from(Decimal::MAX) ; "decimal max")]
fn test_prices_too_large_are_rejected(input: PriceInput) {
    let err = compute_tax(input).unwrap_err();
    assert!(matches!(err, PricingError::InvalidInput { .. }));
}

#[test]
fn test_largest_accepted_price_quotes() {
    let quote = compute_tax("$73000000000000000000000000000").unwrap();
    let formatted = quote.formatted();

    assert_eq!(formatted.tax, "$5,840,000,000,000,000,000,000,000,000.00");
    assert_eq!(formatted.total, "$78,840,000,000,000,000,000,000,000,000.00");
}

#[test_case(&["$50000000000000000000000000000", "$50000000000000000000000000000"], 1 ; "sum overflows")]
#[test_case(&["$1.00", "$79228162514264337593543950335"], 1 ; "second item overflows")]
fn test_overflowing_cart_is_rejected(prices: &[&str], failing_index: usize) {
    let err = CheckoutSummary::from_prices(prices.iter().copied()).unwrap_err();
    match err {
        CheckoutError::InvalidItemPrice { index, .. } => assert_eq!(index, failing_index),
        other => panic!("unexpected error: {other}"),
    }
}

#[test_case(dec!(8), "$8.00")]
#[test_case(dec!(108.004), "$108.00")]
#[test_case(dec!(0), "$0.00")]
#[test_case(dec!(38.335), "$38.34")]
#[test_case(dec!(12345.6), "$12,345.60")]
fn test_format_currency(amount: Decimal, expected: &str) {
    assert_eq!(format_currency(amount), expected);
}

#[test]
fn test_parsing_equivalence() {
    let a = compute_tax(29.99).unwrap();
    let b = compute_tax("29.99").unwrap();
    let c = compute_tax("$29.99").unwrap();

    assert_eq!(a.breakdown(), b.breakdown());
    assert_eq!(b.breakdown(), c.breakdown());
    assert_eq!(c.formatted().tax, "$2.40");
}

#[test]
fn test_aggregation_before_formatting() {
    let total: Money = ["10.00", "20.00", "5.50"]
        .into_iter()
        .map(|p| compute_tax(p).unwrap().base_amount())
        .sum();
    let quote = compute_tax(total).unwrap();

    assert_eq!(format_currency(total.amount()), "$35.50");
    assert_eq!(format_currency(quote.tax_amount().amount()), "$2.84");
    assert_eq!(format_currency(quote.total_amount().amount()), "$38.34");
}

proptest! {
    #[test]
    fn quote_is_pure(whole in 0_u32..1_000_000, cents in 0_u32..100) {
        let text = format!("${whole}.{cents:02}");
        prop_assert_eq!(compute_tax(text.as_str()).unwrap(), compute_tax(text.as_str()).unwrap());
    }

    #[test]
    fn symbol_does_not_change_quote(whole in 0_u32..1_000_000, cents in 0_u32..100) {
        let bare = format!("{whole}.{cents:02}");
        let prefixed = format!("${bare}");
        prop_assert_eq!(
            compute_tax(bare.as_str()).unwrap().breakdown(),
            compute_tax(prefixed.as_str()).unwrap().breakdown()
        );
    }

    #[test]
    fn formatted_total_has_two_decimals(cents in 0_i64..10_000_000_000) {
        let quote = compute_tax(Money::from_cents(cents)).unwrap();
        let shown = format_currency(quote.total_amount().amount());
        prop_assert!(shown.starts_with('$'));
        let (_, fraction) = shown.rsplit_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 2);
    }
}
