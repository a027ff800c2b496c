use std::fmt;
use std::fmt::{Display, Formatter};

/// The canonical currencies a raw ledger label can be normalized to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Currency {
    Usd,
    Eur,
    Gbp
}

impl Currency {
    /// Classifies a free-form currency label or symbol.
    ///
    /// The checks run in a fixed order: `$` or a leading `u`/`U` is USD, then `€` or a
    /// leading `e`/`E` is EUR. Every other label, including `£` and codes that are not
    /// USD/EUR/GBP at all, falls through to GBP.
    pub fn classify(label: &str) -> Self {
        let first = label.chars().next().map(|character| character.to_lowercase().to_string());

        if label == "$" || first.as_deref() == Some("u") {
            Currency::Usd
        } else if label == "€" || first.as_deref() == Some("e") {
            Currency::Eur
        } else {
            Currency::Gbp
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP"
        }
    }
}

impl Display for Currency {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.code())
    }
}
