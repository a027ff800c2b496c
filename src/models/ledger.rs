use crate::models::errors::LedgerError;
use crate::models::{Transaction, TransactionRecord};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

const REQUIRED_COLUMNS: [&str; 5] = ["id", "amount", "currency", "customer_country_code", "processed_at"];

/// The in-memory transaction table the pipeline enriches in place.
///
/// Rows keep file order. Rows with a missing amount (or any other missing
/// required value) never make it into the table.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>
}

impl Ledger {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Loads a ledger from a CSV file with a header row.
    ///
    /// # Errors
    /// Returns `LedgerError` if the file cannot be opened, a required column is
    /// absent, or a row cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|error| LedgerError::open(path, error))?;

        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LedgerError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();

        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(LedgerError::MissingColumn(column));
            }
        }

        let mut transactions = Vec::new();

        for result in reader.deserialize::<TransactionRecord>() {
            let record = result?;
            let id = record.id.clone();

            match record.into_transaction() {
                Some(transaction) => transactions.push(transaction),
                None => debug!("Dropping transaction [{id}] with a missing value")
            }
        }

        Ok(Self::new(transactions))
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Transaction> {
        self.transactions.iter_mut()
    }
}
