use thiserror::Error;

use crate::inflation::InflationError;
use crate::models::LedgerError;
use crate::rates::RateError;
use crate::report::ReportError;
use crate::types::DateError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Date(#[from] DateError),
    #[error(transparent)]
    Rates(#[from] RateError),
    #[error(transparent)]
    Inflation(#[from] InflationError),
    #[error(transparent)]
    Report(#[from] ReportError)
}
