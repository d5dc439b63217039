//! en-US USD currency formatting.
//!
//! Rounding to cents happens here and only here; callers hand in the raw
//! decimal so that multi-item sums are formatted once, at the end.

use rust_decimal::{Decimal, RoundingStrategy};

use super::value_objects::{CURRENCY_SCALE, Money};

/// Currency symbol prefixed to every formatted amount.
pub const CURRENCY_SYMBOL: char = '$';

/// Thousands separator used by the en-US locale.
const GROUP_SEPARATOR: char = ',';

/// Format an amount as an en-US USD string, e.g. `1234.5` → `"$1,234.50"`.
///
/// Rounds half away from zero to two decimal places. Negative amounts
/// render as `-$1.00`; anything that rounds to zero renders as `$0.00`.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let mut rounded =
        amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    rounded = rounded.abs();
    // Near Decimal::MAX the scale cannot grow to two places; cents are padded below.
    rounded.rescale(CURRENCY_SCALE);
    let digits = rounded.to_string();
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut out = String::with_capacity(digits.len() + whole.len() / 3 + 2);
    if negative {
        out.push('-');
    }
    out.push(CURRENCY_SYMBOL);
    out.push_str(&group_thousands(whole));
    out.push('.');
    out.push_str(cents);
    for _ in cents.len()..CURRENCY_SCALE as usize {
        out.push('0');
    }
    out
}

/// Format a [`Money`] value.
#[must_use]
pub fn format_money(amount: Money) -> String {
    format_currency(amount.amount())
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}
