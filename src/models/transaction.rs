use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::{deserialize_nullable_amount, CountryCode, TransactionId};

/// Represents a single row from the input CSV file, as read.
///
/// Every column is optional here; rows with a missing cell are dropped before
/// they become a `Transaction`.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRecord {
    pub id: TransactionId,
    #[serde(deserialize_with = "deserialize_nullable_amount")]
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
    pub customer_country_code: Option<CountryCode>,
    pub processed_at: Option<String>
}

/// A ledger row with every required value present.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    /// Rewritten by currency conversion, then by inflation adjustment.
    pub amount: Decimal,
    /// Raw label on load, canonical code after normalization, the reference
    /// currency after conversion.
    pub currency: String,
    pub customer_country_code: CountryCode,
    /// Kept as written; parsed wherever a date is needed.
    pub processed_at: String
}

impl TransactionRecord {
    /// Converts the record into a `Transaction`, or `None` if any value is missing.
    pub fn into_transaction(self) -> Option<Transaction> {
        Some(Transaction {
            id: self.id,
            amount: self.amount?,
            currency: present(self.currency)?,
            customer_country_code: present(self.customer_country_code)?,
            processed_at: present(self.processed_at)?
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
