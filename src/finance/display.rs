//! Display formatting for money and projection figures.

use rust_decimal::{Decimal, RoundingStrategy};

/// Most fraction digits shown for a currency amount.
const CURRENCY_MAX_FRACTION_DIGITS: u32 = 3;

/// Format a currency amount with thousands separators and up to three
/// fraction digits, trailing zeros dropped, e.g. `$42,000` or `$1,234.5`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(
            CURRENCY_MAX_FRACTION_DIGITS,
            RoundingStrategy::MidpointAwayFromZero,
        )
        .normalize();
    let abs = rounded.abs();
    let digits = abs.trunc().to_string();
    let fraction = abs.fract().normalize().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if let Some(frac) = fraction.strip_prefix('0') {
        // `frac` is ".d..", or empty for a whole amount
        grouped.push_str(frac);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// ROI as a percentage with one decimal place.
pub fn format_roi(roi_percent: Option<Decimal>) -> String {
    match roi_percent {
        Some(roi) => {
            let rounded = roi.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.1}%", rounded)
        }
        None => "n/a".to_string(),
    }
}

/// Break-even months as years and months, e.g. `1y 3m`.
pub fn format_break_even(months: Option<u32>) -> String {
    match months {
        Some(m) => format!("{}y {}m", m / 12, m % 12),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(dec!(0)), "$0");
        assert_eq!(format_currency(dec!(999)), "$999");
        assert_eq!(format_currency(dec!(1000)), "$1,000");
        assert_eq!(format_currency(dec!(42000)), "$42,000");
        assert_eq!(format_currency(dec!(-858000)), "-$858,000");
        assert_eq!(format_currency(dec!(11400.00)), "$11,400");
    }

    #[test]
    fn currency_keeps_up_to_three_fraction_digits() {
        assert_eq!(format_currency(dec!(1234.5)), "$1,234.5");
        assert_eq!(format_currency(dec!(1234567.5)), "$1,234,567.5");
        assert_eq!(format_currency(dec!(0.125)), "$0.125");
        assert_eq!(format_currency(dec!(1000.12345)), "$1,000.123");
        assert_eq!(format_currency(dec!(99.9995)), "$100");
        assert_eq!(format_currency(dec!(-12.50)), "-$12.5");
    }

    #[test]
    fn roi_one_decimal() {
        assert_eq!(format_roi(Some(dec!(12.34))), "12.3%");
        assert_eq!(format_roi(Some(dec!(-50))), "-50.0%");
        assert_eq!(format_roi(None), "n/a");
    }

    #[test]
    fn break_even_years_and_months() {
        assert_eq!(format_break_even(Some(15)), "1y 3m");
        assert_eq!(format_break_even(Some(24)), "2y 0m");
        assert_eq!(format_break_even(None), "n/a");
    }
}
