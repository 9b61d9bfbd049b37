//! Balance normalisation.
//!
//! Turns the heterogeneous records returned by the wallet endpoint into one
//! [`AggregateBalanceSnapshot`]. Everything here is pure: the same input
//! always yields the same snapshot.
use crate::entity::{AggregateBalanceSnapshot, Asset, BalanceError, BalanceRecord};
use crate::utils::{format_fixed, parse_decimal, scale_raw_units};
use log::debug;
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::BTreeMap;

const USD_UNIT: &str = "usd";
const TOTAL_USD_DIGITS: u32 = 2;

/// Aggregate balance records into per-asset display values and a USD total.
///
/// Records with an unknown chain or asset are skipped. A record without a
/// usable asset amount is not listed but its USD value still counts. When two
/// records map to the same key the later one is shown, but both contribute to
/// the total.
pub fn aggregate(records: &[BalanceRecord]) -> AggregateBalanceSnapshot {
    let mut per_asset = BTreeMap::new();
    let mut total_usd = Decimal::ZERO;

    for record in records {
        let (chain, asset) = match record.identify() {
            Ok(identity) => identity,
            Err(e) => {
                debug!("Skipping balance record: {}", e);
                continue;
            }
        };

        let usd = usd_contribution(record);
        total_usd = match total_usd.checked_add(usd) {
            Some(sum) => sum,
            None => {
                debug!("USD total overflow on {} {}, contribution ignored", chain, asset);
                total_usd
            }
        };

        match display_amount(record, asset) {
            Some(amount) => {
                per_asset.insert(
                    format!("{}_{}", chain.display_name(), asset.symbol()),
                    format_fixed(amount, asset.display_precision()),
                );
            }
            None => debug!("No usable {} {} amount, not listed", chain, asset),
        }
    }

    AggregateBalanceSnapshot {
        per_asset,
        total_usd: format_fixed(total_usd, TOTAL_USD_DIGITS),
    }
}

/// Aggregate an untyped `balances` payload.
///
/// Fails only when the payload is not a list; undecodable entries are dropped.
pub fn aggregate_value(balances: &Value) -> Result<AggregateBalanceSnapshot, BalanceError> {
    let records = parse_records(balances)?;
    Ok(aggregate(&records))
}

pub fn parse_records(balances: &Value) -> Result<Vec<BalanceRecord>, BalanceError> {
    let entries = balances.as_array().ok_or_else(|| {
        BalanceError::MalformedResponse("balances is not a list".to_string())
    })?;

    Ok(entries
        .iter()
        .filter_map(
            |entry| match serde_json::from_value::<BalanceRecord>(entry.clone()) {
                Ok(record) => Some(record),
                Err(e) => {
                    debug!("Dropping undecodable balance record: {}", e);
                    None
                }
            },
        )
        .collect())
}

/// Asset-denominated amount: the backend's display value when it parses,
/// otherwise `rawValue / 10^decimals`.
pub fn display_amount(record: &BalanceRecord, asset: Asset) -> Option<Decimal> {
    record
        .display_values
        .get(&asset.display_key())
        .and_then(|value| parse_decimal(value))
        .or_else(|| {
            let raw_value = record.raw_value.as_deref()?;
            let decimals = match record.raw_value_decimals {
                Some(decimals) if decimals > 0 => decimals,
                _ => asset.default_decimals(),
            };
            scale_raw_units(raw_value, decimals)
        })
}

/// USD value supplied by the backend, zero when absent or unparsable
pub fn usd_contribution(record: &BalanceRecord) -> Decimal {
    record
        .display_values
        .get(USD_UNIT)
        .and_then(|value| parse_decimal(value))
        .unwrap_or(Decimal::ZERO)
}
