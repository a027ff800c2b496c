use crate::types::errors::AmountError;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer};
use std::str::FromStr;

const DECIMAL_PLACES: u32 = 2;

/// Cell values a spreadsheet or dataframe export uses to mean "no value".
const NULL_TOKENS: [&str; 18] = [
    "NaN", "nan", "-NaN", "-nan", "NA", "N/A", "n/a", "#N/A", "#N/A N/A", "#NA", "<NA>", "NULL", "null",
    "None", "-1.#IND", "-1.#QNAN", "1.#IND", "1.#QNAN"
];

/// Parses a raw amount cell.
///
/// Empty cells and null tokens yield `Ok(None)`. Plain and scientific notation are both
/// accepted; anything else is an `AmountError`.
pub fn parse_amount(value: &str) -> Result<Option<Decimal>, AmountError> {
    let value = value.trim();

    if value.is_empty() || NULL_TOKENS.contains(&value) {
        return Ok(None);
    }

    let value = value.strip_prefix('+').unwrap_or(value);

    let parsed = if value.contains(['e', 'E']) {
        Decimal::from_scientific(value)
    } else {
        Decimal::from_str(value)
    };

    parsed
        .map(Some)
        .map_err(|_| AmountError::InvalidFormat(value.to_string()))
}

/// Rounds to cents with banker's rounding (half to even).
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp(DECIMAL_PLACES)
}

pub fn deserialize_nullable_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    match value {
        Some(value) => parse_amount(&value).map_err(de::Error::custom),
        None => Ok(None)
    }
}
