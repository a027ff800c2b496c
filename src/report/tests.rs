use super::{Pivot, ReportError};

use anyhow::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{Ledger, Transaction};

fn create_transaction(id: &str, amount: Decimal, country: &str, processed_at: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount,
        currency: "USD".to_string(),
        customer_country_code: country.to_string(),
        processed_at: processed_at.to_string()
    }
}

#[test]
fn test_pivot_sums_rows_sharing_country_and_year() -> Result<()> {
    let ledger = Ledger::new(vec![
        create_transaction("1", dec!(50.00), "US", "2020-01-01"),
        create_transaction("2", dec!(75.00), "US", "2020-11-30 08:00:00"),
        create_transaction("3", dec!(10.00), "US", "2021-02-01"),
    ]);

    let pivot = Pivot::from_ledger(&ledger)?;

    assert_eq!(pivot.get("US", 2020), Some(dec!(125.00)));
    assert_eq!(pivot.get("US", 2021), Some(dec!(10.00)));

    Ok(())
}

#[test]
fn test_pivot_leaves_missing_pairs_undefined() -> Result<()> {
    let ledger = Ledger::new(vec![
        create_transaction("1", dec!(1.00), "US", "2019-05-05"),
        create_transaction("2", dec!(2.00), "FR", "2020-05-05"),
    ]);

    let pivot = Pivot::from_ledger(&ledger)?;

    assert_eq!(pivot.get("FR", 2019), None);
    assert_eq!(pivot.get("US", 2020), None);
    assert_eq!(pivot.get("DE", 2020), None);
    assert_eq!(pivot.countries().collect::<Vec<_>>(), vec!["FR", "US"]);
    assert_eq!(pivot.years().collect::<Vec<_>>(), vec![2019, 2020]);

    Ok(())
}

#[test]
fn test_pivot_fails_on_unparseable_dates() {
    let ledger = Ledger::new(vec![create_transaction("1", dec!(1.00), "US", "not a date")]);

    assert!(Pivot::from_ledger(&ledger).is_err());
}

#[test]
fn test_pivot_fails_when_a_total_overflows() {
    let ledger = Ledger::new(vec![
        create_transaction("1", Decimal::MAX, "US", "2020-01-01"),
        create_transaction("2", dec!(1), "US", "2020-02-01"),
    ]);

    let result = Pivot::from_ledger(&ledger);

    assert!(matches!(result, Err(ReportError::Overflow { ref country, year: 2020 }) if country == "US"));
}

#[test]
fn test_pivot_renders_countries_by_years() -> Result<()> {
    let ledger = Ledger::new(vec![
        create_transaction("1", dec!(100), "US", "2019-05-05"),
        create_transaction("2", dec!(110.5), "US", "2020-05-05"),
        create_transaction("3", dec!(99.5), "US", "2020-06-05"),
        create_transaction("4", dec!(120.50), "FR", "2020-05-05"),
    ]);

    let mut output = Vec::new();
    Pivot::from_ledger(&ledger)?.render(&mut output)?;

    let rendered = String::from_utf8(output)?;
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines, vec![
        "year                     2019    2020",
        "customer_country_code",
        "FR                        NaN  120.50",
        "US                     100.00  210.00",
    ]);

    Ok(())
}

#[test]
fn test_empty_pivot_renders_only_headers() -> Result<()> {
    let mut output = Vec::new();
    Pivot::from_ledger(&Ledger::default())?.render(&mut output)?;

    assert_eq!(String::from_utf8(output)?, "year                 \ncustomer_country_code\n");

    Ok(())
}
