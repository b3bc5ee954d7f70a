use std::cmp::Ordering;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::balance::Balance;

/// Keys accepted by `--sort`. Every key orders descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum SortKey {
    Exchange,
    Symbol,
    Btc,
    Value,
}

pub const DEFAULT_SORT: [SortKey; 1] = [SortKey::Btc];

impl SortKey {
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Ascending comparison of `a` and `b` on this key. Numeric fields that fail to
    /// parse order below every parsed value.
    fn compare(self, a: &Balance, b: &Balance) -> Ordering {
        match self {
            SortKey::Exchange => a.exchange().cmp(b.exchange()),
            SortKey::Symbol => a.symbol().cmp(b.symbol()),
            SortKey::Btc => a.btc_decimal().cmp(&b.btc_decimal()),
            SortKey::Value => a.amount_decimal().cmp(&b.amount_decimal()),
        }
    }
}

/// Descending comparison over a chain of keys: the first key on which the two
/// balances differ decides.
pub fn compare_balances(keys: &[SortKey], a: &Balance, b: &Balance) -> Ordering {
    keys.iter()
        .map(|key| key.compare(b, a))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Sorts balances by `keys`, falling back to [`DEFAULT_SORT`] when `keys` is empty.
pub fn sort_balances(mut balances: Vec<Balance>, keys: &[SortKey]) -> Vec<Balance> {
    let keys = if keys.is_empty() { &DEFAULT_SORT[..] } else { keys };
    balances.sort_by(|a, b| compare_balances(keys, a, b));
    balances
}
