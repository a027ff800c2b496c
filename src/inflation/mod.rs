mod cpi;
mod errors;

use chrono::NaiveDate;
use rust_decimal::Decimal;

pub use cpi::{CpiSeries, DEFAULT_SERIES};
pub use errors::InflationError;

/// A price-level index used to restate past amounts at present-day prices.
pub trait PriceIndex {
    /// Reloads the underlying dataset. Must succeed before `inflate` is used.
    fn refresh(&mut self) -> Result<(), InflationError>;

    /// Restates `amount`, spent on `date`, at the latest known price level.
    fn inflate(&self, amount: Decimal, date: NaiveDate) -> Result<Decimal, InflationError>;
}
