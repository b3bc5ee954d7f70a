use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Exchanges with a balance client. The declaration order is the order in which
/// fetch tasks are launched and flags are listed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Exchange {
    Poloniex,
    Bittrex,
    Cryptopia,
    Liqui,
    Bitfinex,
    Bitgrail,
}

impl Exchange {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_exchange_names_are_lowercase() {
        let names: Vec<&str> = Exchange::iter().map(Exchange::name).collect();
        assert_eq!(
            names,
            vec!["poloniex", "bittrex", "cryptopia", "liqui", "bitfinex", "bitgrail"]
        );
    }

    #[test]
    fn test_exchange_from_str() {
        assert_eq!("liqui".parse::<Exchange>().unwrap(), Exchange::Liqui);
        assert!("binance".parse::<Exchange>().is_err());
    }

    #[test]
    fn test_exchange_display_matches_name() {
        assert_eq!(Exchange::Bitfinex.to_string(), Exchange::Bitfinex.name());
    }
}
