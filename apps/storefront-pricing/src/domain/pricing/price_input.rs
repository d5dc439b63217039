//! Accepted price input shapes and their parsing rules.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::domain::shared::{CURRENCY_SYMBOL, Money, PricingError};

/// Placeholder reported for the missing-price case.
const MISSING: &str = "<missing>";

/// A price as a caller hands it in.
///
/// Page text arrives as `Text` (`"$29.99"`), fixtures and arithmetic
/// results as `Decimal` or `Float`. A price that could not be read at all is
/// `Missing`, which always resolves to an error rather than a `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceInput {
    /// No price was available.
    Missing,
    /// An exact decimal amount.
    Decimal(Decimal),
    /// A binary floating point amount.
    Float(f64),
    /// A textual amount, optionally prefixed with one `$`.
    Text(String),
}

impl PriceInput {
    /// Resolve the input into a validated, non-negative amount.
    pub fn resolve(&self) -> Result<Money, PricingError> {
        match self {
            Self::Missing => Err(PricingError::invalid_input(MISSING, "price is missing")),
            Self::Decimal(amount) => ensure_non_negative(&amount.to_string(), Money::new(*amount)),
            Self::Float(amount) => {
                if !amount.is_finite() {
                    return Err(PricingError::invalid_input(
                        amount.to_string(),
                        "price is not a finite number",
                    ));
                }
                // Shortest round-trip text, so 29.99_f64 and "29.99" agree exactly.
                let text = amount.to_string();
                let decimal = plain_decimal(&text, &text)?;
                ensure_non_negative(&text, Money::new(decimal))
            }
            Self::Text(text) => parse_price(text),
        }
    }
}

impl From<Decimal> for PriceInput {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<Money> for PriceInput {
    fn from(value: Money) -> Self {
        Self::Decimal(value.amount())
    }
}

impl From<f64> for PriceInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for PriceInput {
    fn from(value: i64) -> Self {
        Self::Decimal(Decimal::from(value))
    }
}

impl From<&str> for PriceInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PriceInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for PriceInput {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl<T: Into<Self>> From<Option<T>> for PriceInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Parse a textual price such as `"$29.99"` or `"29.99"`.
///
/// Surrounding whitespace is ignored and a single leading `$` is stripped.
/// The rest must be a plain base-10 decimal: no exponent, no thousands
/// separators, no further symbols. Negative amounts are rejected.
pub fn parse_price(text: &str) -> Result<Money, PricingError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PricingError::invalid_input(text, "price is empty"));
    }

    let number = trimmed.strip_prefix(CURRENCY_SYMBOL).unwrap_or(trimmed);
    if !decimal_pattern().is_match(number) {
        return Err(PricingError::invalid_input(
            text,
            "not a decimal number after an optional leading '$'",
        ));
    }

    let amount = plain_decimal(number, text)?;
    ensure_non_negative(text, Money::new(amount))
}

#[allow(clippy::expect_used)] // Regex is a compile-time constant
fn decimal_pattern() -> &'static Regex {
    static DECIMAL: OnceLock<Regex> = OnceLock::new();
    DECIMAL.get_or_init(|| {
        Regex::new(r"^-?(?:\d+(?:\.\d*)?|\.\d+)$").expect("decimal regex is valid")
    })
}

/// Convert a plain decimal string, refusing non-zero values too small to
/// survive `Decimal`'s 28 fractional digits instead of letting them become 0.
fn plain_decimal(number: &str, input: &str) -> Result<Decimal, PricingError> {
    let amount = Decimal::from_str(&canonical_decimal(number))
        .map_err(|e| PricingError::invalid_input(input, e.to_string()))?;
    if amount.is_zero() && number.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        return Err(PricingError::invalid_input(
            input,
            "price is below the smallest representable amount",
        ));
    }
    Ok(amount)
}

/// Spell out the implied zero of `.5` and drop the dangling dot of `15.`.
fn canonical_decimal(number: &str) -> String {
    let number = number.strip_suffix('.').unwrap_or(number);
    let (sign, digits) = number
        .strip_prefix('-')
        .map_or(("", number), |digits| ("-", digits));
    if digits.starts_with('.') {
        format!("{sign}0{digits}")
    } else {
        format!("{sign}{digits}")
    }
}

fn ensure_non_negative(input: &str, amount: Money) -> Result<Money, PricingError> {
    if amount.is_negative() {
        tracing::warn!(input, "Rejected negative price");
        return Err(PricingError::invalid_input(input, "price cannot be negative"));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    #[test_case("$29.99", dec!(29.99) ; "with currency symbol")]
    #[test_case("29.99", dec!(29.99) ; "bare number")]
    #[test_case("  $7.99\n", dec!(7.99) ; "surrounding whitespace")]
    #[test_case("$100", dec!(100) ; "integer")]
    #[test_case("$.5", dec!(0.5) ; "leading dot")]
    #[test_case("15.", dec!(15) ; "trailing dot")]
    fn test_parse_price_accepts(text: &str, expected: Decimal) {
        assert_eq!(parse_price(text).unwrap().amount(), expected);
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "blank")]
    #[test_case("$" ; "symbol only")]
    #[test_case("abc" ; "letters")]
    #[test_case("$$5" ; "second symbol not stripped")]
    #[test_case("1,000.00" ; "thousands separator")]
    #[test_case("1e3" ; "exponent")]
    #[test_case("USD 5" ; "currency code")]
    #[test_case("5$" ; "trailing symbol")]
    #[test_case("$-5.00" ; "negative after symbol")]
    #[test_case("-$5.00" ; "sign before symbol")]
    fn test_parse_price_rejects(text: &str) {
        let err = parse_price(text).unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput { .. }));
        assert_eq!(err.input(), text);
    }

    #[test]
    fn test_canonical_decimal() {
        assert_eq!(canonical_decimal(".5"), "0.5");
        assert_eq!(canonical_decimal("-.5"), "-0.5");
        assert_eq!(canonical_decimal("15."), "15");
        assert_eq!(canonical_decimal("29.99"), "29.99");
    }

    #[test]
    fn test_resolve_missing() {
        let err = PriceInput::from(None::<&str>).resolve().unwrap_err();
        assert_eq!(err.input(), MISSING);
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_resolve_option_some() {
        let input = PriceInput::from(Some("$9.99"));
        assert_eq!(input.resolve().unwrap().amount(), dec!(9.99));
    }

    #[test]
    fn test_resolve_float() {
        assert_eq!(PriceInput::from(29.99).resolve().unwrap().amount(), dec!(29.99));
        assert!(PriceInput::from(f64::NAN).resolve().is_err());
        assert!(PriceInput::from(f64::INFINITY).resolve().is_err());
        assert!(PriceInput::from(-1.0).resolve().is_err());
    }

    #[test_case(1e-30 ; "below decimal precision")]
    #[test_case(5e-324 ; "smallest subnormal")]
    fn test_resolve_float_underflow_is_rejected(amount: f64) {
        let err = PriceInput::from(amount).resolve().unwrap_err();
        assert!(err.to_string().contains("smallest representable"));
    }

    #[test]
    fn test_parse_price_underflow_is_rejected() {
        let text = format!("$0.{}1", "0".repeat(40));
        assert!(parse_price(&text).is_err());
        assert!(parse_price("$0.0000").unwrap().is_zero());
    }

    #[test]
    fn test_resolve_decimal_and_integer() {
        assert_eq!(PriceInput::from(dec!(5.50)).resolve().unwrap().amount(), dec!(5.50));
        assert_eq!(PriceInput::from(100_i64).resolve().unwrap().amount(), dec!(100));
        assert!(PriceInput::from(dec!(-0.01)).resolve().is_err());
    }
}
