use crate::rates::errors::RateError;
use crate::rates::ExchangeRates;
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

const REFERENCE_CURRENCY: &str = "EUR";
const MISSING_RATE: &str = "N/A";

/// Historical reference rates in the European Central Bank layout.
///
/// Every rate is quoted against one euro, so a conversion goes through EUR:
/// `amount / rate(from) * rate(to)`. The euro itself has a rate of 1 on any day
/// inside the table's date range.
#[derive(Debug, Clone, Default)]
pub struct EcbRateTable {
    /// Date -> (Currency -> units per EUR)
    rates: BTreeMap<NaiveDate, HashMap<String, Decimal>>,
    currencies: BTreeSet<String>
}

impl EcbRateTable {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RateError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| RateError::Open { path: path.to_path_buf(), source })?;

        let table = Self::from_reader(BufReader::new(file))?;

        debug!("Loaded {} days of exchange rates from {}", table.rates.len(), path.display());

        Ok(table)
    }

    /// Reads a `Date,USD,JPY,...` table with one row per business day.
    ///
    /// `N/A` and empty cells are missing rates. Columns with an empty header (the
    /// trailing separator the ECB files carry) are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RateError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();

        if headers.get(0).is_none_or(|header| !header.eq_ignore_ascii_case("date")) {
            return Err(RateError::Malformed("first column must be 'Date'".to_string()));
        }

        let columns: Vec<Option<String>> = headers.iter()
            .skip(1)
            .map(|header| (!header.is_empty()).then(|| header.to_uppercase()))
            .collect();

        let mut table = Self::default();
        table.currencies.insert(REFERENCE_CURRENCY.to_string());
        table.currencies.extend(columns.iter().flatten().cloned());

        for result in reader.records() {
            let record = result?;

            let Some(field) = record.get(0).filter(|field| !field.is_empty()) else {
                continue;
            };

            let date = NaiveDate::parse_from_str(field, "%Y-%m-%d")
                .map_err(|error| RateError::Malformed(format!("invalid date '{field}': {error}")))?;

            let day = table.rates.entry(date).or_default();

            for (currency, value) in columns.iter().zip(record.iter().skip(1)) {
                let Some(currency) = currency else {
                    continue;
                };

                if value.is_empty() || value == MISSING_RATE {
                    continue;
                }

                let rate = Decimal::from_str(value)
                    .map_err(|error| RateError::Malformed(format!("invalid rate '{value}' for {currency} on {date}: {error}")))?;

                if rate <= Decimal::ZERO {
                    return Err(RateError::Malformed(format!("non-positive rate {rate} for {currency} on {date}")));
                }

                day.insert(currency.clone(), rate);
            }
        }

        Ok(table)
    }

    pub fn supports(&self, currency: &str) -> bool {
        self.currencies.contains(currency)
    }

    /// Units of `currency` per euro on `date`.
    pub fn rate(&self, currency: &str, date: NaiveDate) -> Result<Decimal, RateError> {
        if !self.supports(currency) {
            return Err(RateError::UnsupportedCurrency(currency.to_string()));
        }

        if currency == REFERENCE_CURRENCY {
            return if self.in_range(date) {
                Ok(Decimal::ONE)
            } else {
                Err(RateError::rate_not_found(currency, date))
            };
        }

        self.rates.get(&date)
            .and_then(|day| day.get(currency))
            .copied()
            .ok_or_else(|| RateError::rate_not_found(currency, date))
    }

    fn in_range(&self, date: NaiveDate) -> bool {
        match (self.rates.first_key_value(), self.rates.last_key_value()) {
            (Some((first, _)), Some((last, _))) => *first <= date && date <= *last,
            _ => false
        }
    }
}

impl ExchangeRates for EcbRateTable {
    fn convert(&self, amount: Decimal, from: &str, to: &str, date: NaiveDate) -> Result<Decimal, RateError> {
        for currency in [from, to] {
            if !self.supports(currency) {
                return Err(RateError::UnsupportedCurrency(currency.to_string()));
            }
        }

        let from_rate = self.rate(from, date)?;
        let to_rate = self.rate(to, date)?;

        amount.checked_div(from_rate)
            .and_then(|value| value.checked_mul(to_rate))
            .ok_or_else(|| RateError::overflow(from, to, date))
    }
}
