use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmountError {
    #[error("Amount error: '{0}' is not a number")]
    InvalidFormat(String)
}

#[derive(Debug, Error)]
pub enum DateError {
    #[error("Date error: '{0}' could not be parsed as a date")]
    Unparseable(String)
}
