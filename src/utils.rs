use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

// Largest scale rust_decimal can represent
const MAX_DECIMAL_SCALE: u32 = 28;

/// Parse a decimal string such as `"0.0025"` or `"1.5e-3"`
pub fn parse_decimal(value: &str) -> Option<Decimal> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

/// Convert a smallest-unit integer string into its decimal amount.
///
/// Exact while the value fits rust_decimal's 96-bit mantissa and 28-digit
/// scale. Beyond that the amount goes through `f64` and may lose precision.
pub fn scale_raw_units(raw_value: &str, decimals: u32) -> Option<Decimal> {
    let raw_value = raw_value.trim();

    if decimals <= MAX_DECIMAL_SCALE {
        if let Ok(units) = raw_value.parse::<i128>() {
            if let Ok(amount) = Decimal::try_from_i128_with_scale(units, decimals) {
                return Some(amount.normalize());
            }
        }
    }

    let units = raw_value.parse::<f64>().ok()?;
    if !units.is_finite() {
        return None;
    }
    Decimal::from_f64(units / 10f64.powi(decimals as i32))
}

/// Round half away from zero and render with exactly `digits` fraction digits
pub fn format_fixed(amount: Decimal, digits: u32) -> String {
    let rounded = amount.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
    // -0.00 renders as 0.00
    let rounded = if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    };
    format!("{:.*}", digits as usize, rounded)
}

/// Insert `,` every three integer digits (`155000.00` -> `155,000.00`)
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

// Shorten address for display
pub fn shorten_address(address: &str) -> String {
    if address.len() <= 12 || !address.is_ascii() {
        return address.to_string();
    }

    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_scientific_decimals() {
        assert_eq!(parse_decimal("0.0025"), Decimal::from_str("0.0025").ok());
        assert_eq!(parse_decimal("1.5e-3"), Decimal::from_str("0.0015").ok());
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("abc"), None);
    }

    #[test]
    fn scales_raw_units_exactly() {
        let amount = scale_raw_units("2500000000000000", 18).unwrap();
        assert_eq!(amount.to_string(), "0.0025");

        let amount = scale_raw_units("15000000", 6).unwrap();
        assert_eq!(amount.to_string(), "15");
    }

    #[test]
    fn falls_back_to_float_for_oversized_values() {
        // 10^40 wei does not fit a 96-bit mantissa
        let raw = format!("1{}", "0".repeat(40));
        let amount = scale_raw_units(&raw, 18).unwrap();
        let lower = Decimal::from_str("9990000000000000000000").unwrap();
        let upper = Decimal::from_str("10010000000000000000000").unwrap();
        assert!(amount > lower && amount < upper, "got {}", amount);
    }

    #[test]
    fn rejects_garbage_raw_values() {
        assert_eq!(scale_raw_units("not-a-number", 18), None);
        assert_eq!(scale_raw_units("inf", 6), None);
    }

    #[test]
    fn formats_fixed_precision() {
        let value = Decimal::from_str("0.0025").unwrap();
        assert_eq!(format_fixed(value, 6), "0.002500");
        assert_eq!(format_fixed(Decimal::from_str("2.345").unwrap(), 2), "2.35");
        assert_eq!(format_fixed(Decimal::from_str("-0.0001").unwrap(), 2), "0.00");
        assert_eq!(format_fixed(Decimal::ZERO, 2), "0.00");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands("155000.00"), "155,000.00");
        assert_eq!(group_thousands("1234567.89"), "1,234,567.89");
        assert_eq!(group_thousands("999.99"), "999.99");
        assert_eq!(group_thousands("-1000.00"), "-1,000.00");
        assert_eq!(group_thousands("1000000"), "1,000,000");
    }

    #[test]
    fn shortens_long_addresses() {
        assert_eq!(
            shorten_address("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU"),
            "7xKXtg...gAsU"
        );
        assert_eq!(shorten_address("short"), "short");
    }
}
