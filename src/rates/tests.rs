use super::{EcbRateTable, ExchangeRates, RateError};

use std::io::Write;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tempfile::NamedTempFile;

const RATES: &str = "\
Date,USD,JPY,GBP,CYP,
2020-01-03,1.1147,120.71,0.85208,N/A,
2020-01-02,1.1193,121.75,0.84828,N/A,
2019-12-31,1.1234,121.94,0.85080,N/A,
";

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| anyhow!("invalid date {year}-{month}-{day}"))
}

#[test]
fn test_rates_are_read_per_euro() -> Result<()> {
    let table = EcbRateTable::from_reader(RATES.as_bytes())?;

    assert_eq!(table.rate("USD", date(2020, 1, 2)?)?, dec!(1.1193));
    assert_eq!(table.rate("GBP", date(2020, 1, 3)?)?, dec!(0.85208));
    assert_eq!(table.rate("EUR", date(2020, 1, 2)?)?, dec!(1));

    Ok(())
}

#[test]
fn test_conversion_goes_through_the_euro() -> Result<()> {
    let table = EcbRateTable::from_reader(RATES.as_bytes())?;

    let from_euro = table.convert(dec!(100), "EUR", "USD", date(2020, 1, 2)?)?;
    let to_euro = table.convert(dec!(111.93), "USD", "EUR", date(2020, 1, 2)?)?;
    let cross = table.convert(dec!(84.828), "GBP", "USD", date(2020, 1, 2)?)?;

    assert_eq!(from_euro, dec!(111.93));
    assert_eq!(to_euro, dec!(100));
    assert_eq!(cross.round_dp(4), dec!(111.93));

    Ok(())
}

#[test]
fn test_missing_day_is_reported_as_rate_not_found() -> Result<()> {
    let table = EcbRateTable::from_reader(RATES.as_bytes())?;

    // 2020-01-01 is a holiday and has no row.
    let result = table.convert(dec!(10), "GBP", "USD", date(2020, 1, 1)?);

    assert!(matches!(result, Err(RateError::RateNotFound { .. })));

    Ok(())
}

#[test]
fn test_not_available_cells_are_missing_rates() -> Result<()> {
    let table = EcbRateTable::from_reader(RATES.as_bytes())?;

    assert!(table.supports("CYP"));
    assert!(matches!(table.rate("CYP", date(2020, 1, 2)?), Err(RateError::RateNotFound { .. })));

    Ok(())
}

#[test]
fn test_euro_outside_table_range_has_no_rate() -> Result<()> {
    let table = EcbRateTable::from_reader(RATES.as_bytes())?;

    assert!(matches!(table.rate("EUR", date(2021, 1, 1)?), Err(RateError::RateNotFound { .. })));
    assert!(matches!(table.rate("EUR", date(2019, 1, 1)?), Err(RateError::RateNotFound { .. })));

    Ok(())
}

#[test]
fn test_unknown_currency_is_unsupported_even_on_missing_days() -> Result<()> {
    let table = EcbRateTable::from_reader(RATES.as_bytes())?;

    let result = table.convert(dec!(10), "GBP", "XYZ", date(2020, 1, 1)?);

    assert!(matches!(result, Err(RateError::UnsupportedCurrency(currency)) if currency == "XYZ"));

    Ok(())
}

#[test]
fn test_table_loads_from_file_and_fails_when_missing() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{RATES}")?;

    let table = EcbRateTable::load(file.path())?;

    assert_eq!(table.rate("JPY", date(2019, 12, 31)?)?, dec!(121.94));
    assert!(matches!(EcbRateTable::load("missing-eurofxref-hist.csv"), Err(RateError::Open { .. })));

    Ok(())
}

#[test]
fn test_malformed_tables_are_rejected() {
    assert!(EcbRateTable::from_reader("Day,USD\n2020-01-02,1.1\n".as_bytes()).is_err());
    assert!(EcbRateTable::from_reader("Date,USD\n02.01.2020,1.1\n".as_bytes()).is_err());
    assert!(EcbRateTable::from_reader("Date,USD\n2020-01-02,abc\n".as_bytes()).is_err());
    assert!(EcbRateTable::from_reader("Date,USD\n2020-01-02,0\n".as_bytes()).is_err());
}
