use std::collections::BTreeMap;

use tracing::debug;

use crate::models::Ledger;
use crate::types::Currency;

/// Maps every distinct raw currency label in the ledger to its canonical currency.
pub fn currency_map(ledger: &Ledger) -> BTreeMap<String, Currency> {
    ledger.iter()
        .map(|transaction| (transaction.currency.clone(), Currency::classify(&transaction.currency)))
        .collect()
}

/// Rewrites each row's currency label to its canonical code.
pub fn normalize_currencies(ledger: &mut Ledger) {
    let mapping = currency_map(ledger);

    for (label, currency) in &mapping {
        debug!("Currency label '{label}' normalized to {currency}");
    }

    for transaction in ledger.iter_mut() {
        if let Some(currency) = mapping.get(&transaction.currency) {
            transaction.currency = currency.code().to_string();
        }
    }
}
