use crate::inflation::errors::InflationError;
use crate::inflation::PriceIndex;
use chrono::{Datelike, NaiveDate};
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// CPI for All Urban Consumers, all items, U.S. city average, not seasonally adjusted.
pub const DEFAULT_SERIES: &str = "CUUR0000SA0";

/// One line of a BLS time-series flat file.
#[derive(Debug, Deserialize)]
struct CpiRecord {
    series_id: String,
    year: i32,
    period: String,
    value: String
}

/// A monthly consumer price index read from a BLS flat file
/// (`series_id year period value footnote_codes`, tab-delimited).
#[derive(Debug, Clone)]
pub struct CpiSeries {
    path: PathBuf,
    series_id: String,
    /// (year, month) -> index value
    months: BTreeMap<(i32, u32), Decimal>
}

impl CpiSeries {
    /// Creates an empty series backed by `path`. Nothing is read until `refresh`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            series_id: DEFAULT_SERIES.to_string(),
            months: BTreeMap::new()
        }
    }

    pub fn with_series(mut self, series_id: impl Into<String>) -> Self {
        self.series_id = series_id.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The most recent month in the series and its index value.
    pub fn latest(&self) -> Option<((i32, u32), Decimal)> {
        self.months.last_key_value().map(|(month, value)| (*month, *value))
    }

    /// Reads the monthly observations (`M01`..`M12`) of the configured series.
    ///
    /// Annual averages (`M13`), other series and non-numeric values are skipped.
    pub fn read_months<R: Read>(&self, reader: R) -> Result<BTreeMap<(i32, u32), Decimal>, InflationError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut months = BTreeMap::new();

        for result in reader.deserialize::<CpiRecord>() {
            let record = result?;

            if record.series_id != self.series_id {
                continue;
            }

            let Some(month) = monthly_period(&record.period) else {
                continue;
            };

            match Decimal::from_str(&record.value) {
                Ok(value) if value > Decimal::ZERO => {
                    months.insert((record.year, month), value);
                }
                _ => debug!("Skipping price index value '{}' for {}-{}", record.value, record.year, record.period)
            }
        }

        if months.is_empty() {
            return Err(InflationError::EmptySeries(self.series_id.clone()));
        }

        Ok(months)
    }
}

impl PriceIndex for CpiSeries {
    fn refresh(&mut self) -> Result<(), InflationError> {
        let file = File::open(&self.path)
            .map_err(|source| InflationError::Open { path: self.path.clone(), source })?;

        self.months = self.read_months(BufReader::new(file))?;

        if let Some(((year, month), value)) = self.latest() {
            info!("Price index {} refreshed, latest {year}-{month:02} = {value}", self.series_id);
        }

        Ok(())
    }

    fn inflate(&self, amount: Decimal, date: NaiveDate) -> Result<Decimal, InflationError> {
        let (_, latest) = self.latest().ok_or(InflationError::NotLoaded)?;

        let source = self.months.get(&(date.year(), date.month()))
            .copied()
            .ok_or(InflationError::MonthNotFound { year: date.year(), month: date.month() })?;

        amount.checked_mul(latest)
            .and_then(|value| value.checked_div(source))
            .or_else(|| latest.checked_div(source).and_then(|ratio| amount.checked_mul(ratio)))
            .ok_or(InflationError::Overflow { amount })
    }
}

fn monthly_period(period: &str) -> Option<u32> {
    let month: u32 = period.strip_prefix('M')?.parse().ok()?;

    (1..=12).contains(&month).then_some(month)
}
