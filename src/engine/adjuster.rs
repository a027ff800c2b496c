use crate::engine::errors::PipelineError;
use crate::inflation::PriceIndex;
use crate::models::Ledger;
use crate::types::{parse_date, round_cents};

/// Refreshes the price index, then restates every amount at present-day prices.
pub fn adjust_for_inflation<P: PriceIndex + ?Sized>(ledger: &mut Ledger, index: &mut P) -> Result<(), PipelineError> {
    index.refresh()?;

    for transaction in ledger.iter_mut() {
        let date = parse_date(&transaction.processed_at)?;
        transaction.amount = round_cents(index.inflate(transaction.amount, date)?);
    }

    Ok(())
}
