use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RateError {
    #[error("No exchange rate for [{currency}] on {date}")]
    RateNotFound {
        currency: String,
        date: NaiveDate
    },
    #[error("Currency [{0}] is not in the exchange rate table")]
    UnsupportedCurrency(String),
    #[error("Numeric overflow converting [{from}] to [{to}] on {date}")]
    Overflow {
        from: String,
        to: String,
        date: NaiveDate
    },
    #[error("Could not open exchange rate table [{}]: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error
    },
    #[error("Malformed exchange rate table: {0}")]
    Malformed(String),
    #[error("Malformed exchange rate table: {0}")]
    Csv(#[from] csv::Error)
}

impl RateError {
    pub fn rate_not_found(currency: &str, date: NaiveDate) -> Self {
        Self::RateNotFound { currency: currency.to_string(), date }
    }

    pub fn overflow(from: &str, to: &str, date: NaiveDate) -> Self {
        Self::Overflow { from: from.to_string(), to: to.to_string(), date }
    }
}
