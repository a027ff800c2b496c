use chrono::Datelike;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Write};

use crate::models::Ledger;
use crate::report::errors::ReportError;
use crate::types::{parse_date, CountryCode};

const ROW_LABEL: &str = "customer_country_code";
const COLUMN_LABEL: &str = "year";
const UNDEFINED_CELL: &str = "NaN";
const COLUMN_GAP: usize = 2;

/// Summed amounts per country (rows) and calendar year (columns).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pivot {
    cells: BTreeMap<CountryCode, BTreeMap<i32, Decimal>>,
    years: BTreeSet<i32>
}

impl Pivot {
    /// Groups the ledger by country and transaction year, summing amounts.
    ///
    /// # Errors
    /// Returns `ReportError` if a transaction date cannot be parsed or a total overflows.
    pub fn from_ledger(ledger: &Ledger) -> Result<Self, ReportError> {
        let mut pivot = Self::default();

        for transaction in ledger.iter() {
            let year = parse_date(&transaction.processed_at)?.year();

            let total = pivot.cells
                .entry(transaction.customer_country_code.clone())
                .or_default()
                .entry(year)
                .or_insert(Decimal::ZERO);

            *total = total.checked_add(transaction.amount)
                .ok_or_else(|| ReportError::overflow(&transaction.customer_country_code, year))?;

            pivot.years.insert(year);
        }

        Ok(pivot)
    }

    /// The summed amount for a country and year, `None` when no row had that pair.
    pub fn get(&self, country: &str, year: i32) -> Option<Decimal> {
        self.cells.get(country)?.get(&year).copied()
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.years.iter().copied()
    }

    /// Writes the pivot as a fixed-width text table, one line per country.
    pub fn render<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let label_width = self.countries()
            .map(str::len)
            .chain([ROW_LABEL.len(), COLUMN_LABEL.len()])
            .max()
            .unwrap_or(ROW_LABEL.len());

        let rows: Vec<(&str, Vec<String>)> = self.countries()
            .map(|country| {
                let cells = self.years()
                    .map(|year| match self.get(country, year) {
                        Some(amount) => format!("{:.2}", amount.round_dp(2)),
                        None => UNDEFINED_CELL.to_string()
                    })
                    .collect();

                (country, cells)
            })
            .collect();

        let widths: Vec<usize> = self.years()
            .enumerate()
            .map(|(column, year)| {
                rows.iter()
                    .map(|(_, cells)| cells[column].len())
                    .chain([year.to_string().len()])
                    .max()
                    .unwrap_or_default() + COLUMN_GAP
            })
            .collect();

        write!(output, "{COLUMN_LABEL:<label_width$}")?;
        for (year, width) in self.years().zip(widths.iter().copied()) {
            write!(output, "{year:>width$}")?;
        }
        writeln!(output)?;

        writeln!(output, "{ROW_LABEL}")?;

        for (country, cells) in &rows {
            write!(output, "{country:<label_width$}")?;
            for (cell, width) in cells.iter().zip(widths.iter().copied()) {
                write!(output, "{cell:>width$}")?;
            }
            writeln!(output)?;
        }

        Ok(())
    }
}
