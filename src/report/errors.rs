use thiserror::Error;

use crate::types::{CountryCode, DateError};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Date(#[from] DateError),
    #[error("Report error: total for [{country}] in {year} overflows")]
    Overflow {
        country: CountryCode,
        year: i32
    }
}

impl ReportError {
    pub fn overflow(country: impl Into<CountryCode>, year: i32) -> Self {
        Self::Overflow { country: country.into(), year }
    }
}
