//! Display formatting for money and dates.
//!
//! All rounding lives here: the calculation engine works at full precision
//! and the 2-decimal-place presentation is applied only when a value is
//! rendered.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Rounds a value to exactly two decimal places using half-up rounding
/// (midpoints go away from zero, the usual convention for money).
///
/// ```
/// use rust_decimal_macros::dec;
/// use shift_core::format::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a money value for display: rounded to at most two decimal
/// places, trailing zeros dropped, thousands grouped with spaces, decimal
/// comma, and the local currency suffix.
///
/// ```
/// use rust_decimal_macros::dec;
/// use shift_core::format::format_currency;
///
/// assert_eq!(format_currency(dec!(1234.5)), "1 234,5 ₽ ПМР");
/// assert_eq!(format_currency(dec!(800)), "800 ₽ ПМР");
/// assert_eq!(format_currency(dec!(-50.005)), "-50,01 ₽ ПМР");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_half_up(value).normalize();
    let text = rounded.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped},{frac} ₽ ПМР"),
        None => format!("{sign}{grouped} ₽ ПМР"),
    }
}

/// Formats a `YYYY-MM-DD` date string as `DD.MM.YYYY`.
///
/// Unparseable input is returned unchanged; this is a presentation helper
/// and never fails.
pub fn format_date(value: &str) -> String {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => value.to_string(),
    }
}
