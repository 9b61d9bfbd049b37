use crate::entity::{CurrencyCode, ExchangeRate, RateSource};
use crate::utils::{format_fixed, group_thousands, parse_decimal};
use lazy_static::lazy_static;
use log::warn;
use rust_decimal::Decimal;
use std::collections::HashMap;

lazy_static! {
    /// Approximate units per USD used when the pricing endpoint is unavailable
    pub static ref FALLBACK_RATES: HashMap<CurrencyCode, Decimal> = {
        let mut rates = HashMap::new();
        rates.insert(CurrencyCode::Ngn, Decimal::from(1600));
        rates.insert(CurrencyCode::Ghs, Decimal::from(15));
        rates.insert(CurrencyCode::Kes, Decimal::from(155));
        rates
    };
}

/// Static rate for `currency`, or rate 1 (unconverted) when it has none
pub fn fallback_rate(currency: CurrencyCode) -> ExchangeRate {
    if currency == CurrencyCode::Usd {
        return ExchangeRate::identity();
    }

    match FALLBACK_RATES.get(&currency) {
        Some(rate) => ExchangeRate::new(currency, *rate, RateSource::Fallback),
        None => ExchangeRate::new(currency, Decimal::ONE, RateSource::Unconverted),
    }
}

// None when the product exceeds Decimal's range
fn converted_amount(amount_usd: Decimal, rate: &ExchangeRate) -> Option<Decimal> {
    let converted = amount_usd.checked_mul(rate.rate_to_usd);
    if converted.is_none() {
        warn!(
            "Converting {} USD to {} overflows, showing the USD amount",
            amount_usd, rate.currency_code
        );
    }
    converted
}

fn format_grouped(amount: Decimal, currency: CurrencyCode) -> String {
    group_thousands(&format_fixed(amount, currency.fraction_digits()))
}

/// Multiply a USD amount by `rate` and format it with grouped thousands.
///
/// On overflow the USD amount is returned unconverted.
pub fn convert(amount_usd: Decimal, rate: &ExchangeRate) -> String {
    let amount = converted_amount(amount_usd, rate).unwrap_or(amount_usd);
    format_grouped(amount, rate.currency_code)
}

/// [`convert`] for a snapshot's string total; unparsable input counts as zero
pub fn convert_str(amount_usd: &str, rate: &ExchangeRate) -> String {
    convert(parse_decimal(amount_usd).unwrap_or(Decimal::ZERO), rate)
}

/// Converted amount prefixed with the currency symbol (`₦155,000.00`).
///
/// Whenever the figure is still USD (unconverted rate or overflow) the dollar
/// sign is kept.
pub fn format_with_symbol(amount_usd: Decimal, rate: &ExchangeRate) -> String {
    let converted = match rate.source {
        RateSource::Unconverted => None,
        _ => converted_amount(amount_usd, rate),
    };

    let (symbol, formatted) = match converted {
        Some(amount) => (
            rate.currency_code.symbol(),
            format_grouped(amount, rate.currency_code),
        ),
        None => (
            CurrencyCode::Usd.symbol(),
            format_grouped(amount_usd, CurrencyCode::Usd),
        ),
    };

    match formatted.strip_prefix('-') {
        Some(unsigned) => format!("-{}{}", symbol, unsigned),
        None => format!("{}{}", symbol, formatted),
    }
}
