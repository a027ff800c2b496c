mod ecb;
mod errors;
#[cfg(test)]
mod tests;

use chrono::NaiveDate;
use rust_decimal::Decimal;

pub use ecb::EcbRateTable;
pub use errors::RateError;

/// A source of historical exchange rates.
pub trait ExchangeRates {
    /// Converts `amount` from one currency to another at the rate published for `date`.
    ///
    /// Implementations return `RateError::RateNotFound` when no rate exists for that exact
    /// date; callers decide whether to look further back.
    fn convert(&self, amount: Decimal, from: &str, to: &str, date: NaiveDate) -> Result<Decimal, RateError>;
}
