use chrono::Days;
use rust_decimal::Decimal;
use tracing::debug;

use crate::engine::errors::PipelineError;
use crate::models::{Ledger, Transaction};
use crate::rates::{ExchangeRates, RateError};
use crate::types::{parse_date, round_cents};

/// How many days, counting the transaction date itself, are searched for a rate.
pub const LOOKBACK_DAYS: u64 = 5;

/// Converts one row's amount into `target`.
///
/// Rows already in `target` pass through untouched. Otherwise the rate for the
/// transaction date is used, falling back one day at a time for up to four earlier
/// days. When none of them has a rate the amount becomes 0.00.
pub fn convert_amount<R: ExchangeRates + ?Sized>(rates: &R, transaction: &Transaction, target: &str) -> Result<Decimal, PipelineError> {
    if transaction.currency == target {
        return Ok(transaction.amount);
    }

    let date = parse_date(&transaction.processed_at)?;

    for offset in 0..LOOKBACK_DAYS {
        let Some(day) = date.checked_sub_days(Days::new(offset)) else {
            break;
        };

        match rates.convert(transaction.amount, &transaction.currency, target, day) {
            Ok(converted) => return Ok(round_cents(converted)),
            Err(RateError::RateNotFound { .. }) => continue,
            Err(error) => return Err(error.into())
        }
    }

    debug!(
        "No {}->{} rate within {LOOKBACK_DAYS} days of {date} for transaction [{}], using 0.00",
        transaction.currency, target, transaction.id
    );

    Ok(Decimal::new(0, 2))
}

/// Converts every amount in the ledger into `target`, then relabels every row with it.
pub fn convert_currencies<R: ExchangeRates + ?Sized>(ledger: &mut Ledger, rates: &R, target: &str) -> Result<(), PipelineError> {
    for transaction in ledger.iter_mut() {
        transaction.amount = convert_amount(rates, transaction, target)?;
    }

    for transaction in ledger.iter_mut() {
        transaction.currency = target.to_string();
    }

    Ok(())
}
