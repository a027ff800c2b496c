use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InflationError {
    #[error("Could not open price index [{}]: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error
    },
    #[error("Malformed price index: {0}")]
    Malformed(#[from] csv::Error),
    #[error("Price index series [{0}] has no monthly observations")]
    EmptySeries(String),
    #[error("Price index has not been loaded, refresh it first")]
    NotLoaded,
    #[error("Price index has no value for {year}-{month:02}")]
    MonthNotFound {
        year: i32,
        month: u32
    },
    #[error("Numeric overflow adjusting {amount} for inflation")]
    Overflow {
        amount: rust_decimal::Decimal
    }
}
