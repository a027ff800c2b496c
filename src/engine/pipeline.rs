use std::path::Path;

use tracing::{info, warn};

use crate::engine::adjuster::adjust_for_inflation;
use crate::engine::converter::convert_currencies;
use crate::engine::errors::PipelineError;
use crate::engine::normalizer::normalize_currencies;
use crate::inflation::PriceIndex;
use crate::models::Ledger;
use crate::rates::ExchangeRates;
use crate::report::Pivot;
use crate::types::Currency;

/// Runs a ledger through normalization, conversion, inflation adjustment and aggregation.
pub struct Pipeline<R, P> {
    rates: R,
    index: P,
    target: String
}

impl<R: ExchangeRates, P: PriceIndex> Pipeline<R, P> {
    /// Creates a pipeline reporting in US dollars.
    pub fn new(rates: R, index: P) -> Self {
        Self {
            rates,
            index,
            target: Currency::Usd.code().to_string()
        }
    }

    pub fn with_target(mut self, target: impl AsRef<str>) -> Self {
        self.target = target.as_ref().trim().to_uppercase();
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Loads the transaction file at `path` and produces the country-by-year summary.
    pub fn run(&mut self, path: impl AsRef<Path>) -> Result<Pivot, PipelineError> {
        let mut ledger = Ledger::load(path)?;
        info!("Loaded {} transactions", ledger.len());

        if ledger.is_empty() {
            warn!("No transactions with an amount to report on");
        }

        self.process(&mut ledger)
    }

    /// Enriches `ledger` in place and aggregates it.
    pub fn process(&mut self, ledger: &mut Ledger) -> Result<Pivot, PipelineError> {
        normalize_currencies(ledger);

        convert_currencies(ledger, &self.rates, &self.target)?;
        info!("Converted {} transactions into {}", ledger.len(), self.target);

        adjust_for_inflation(ledger, &mut self.index)?;
        info!("Adjusted {} transactions for inflation", ledger.len());

        Ok(Pivot::from_ledger(ledger)?)
    }
}
