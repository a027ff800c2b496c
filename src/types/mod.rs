mod amount;
mod currency;
mod dates;
mod errors;

pub use amount::{deserialize_nullable_amount, round_cents};
pub use currency::Currency;
pub use dates::parse_date;
pub use errors::DateError;

pub type TransactionId = String;
pub type CountryCode = String;
