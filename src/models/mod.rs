mod errors;
mod ledger;
mod transaction;

pub use errors::LedgerError;
pub use ledger::Ledger;
pub use transaction::{Transaction, TransactionRecord};
