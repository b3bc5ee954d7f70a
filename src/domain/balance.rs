use std::str::FromStr;

use rust_decimal::{prelude::FromPrimitive, Decimal};

/// Balance of a single currency as reported by an exchange client. Both values are
/// decimal strings exactly as the client returned them.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExchangeBalance {
    pub amount: String,
    pub btc_value: String,
}

impl ExchangeBalance {
    pub fn new(amount: impl Into<String>, btc_value: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            btc_value: btc_value.into(),
        }
    }
}

/// One row of the aggregated portfolio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balance {
    symbol: String,
    exchange: String,
    amount: String,
    btc_value: String,
}

impl Balance {
    pub fn new(symbol: impl Into<String>, exchange: impl Into<String>, raw: ExchangeBalance) -> Self {
        Self {
            symbol: symbol.into(),
            exchange: exchange.into(),
            amount: raw.amount,
            btc_value: raw.btc_value,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Exchange label, e.g. `poloniex` or `poloniex #2` when several accounts were given.
    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn btc_value(&self) -> &str {
        &self.btc_value
    }

    pub fn amount_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.amount)
    }

    pub fn btc_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.btc_value)
    }
}

/// Parses a decimal string as sent by exchanges, accepting scientific notation
/// (`1e-8`) as well. Finite numbers beyond `Decimal`'s range saturate to
/// `Decimal::MAX`/`Decimal::MIN` (or zero when too small to represent). Returns
/// `None` for anything that is not a finite number.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
        .or_else(|| saturate_float(raw))
}

fn saturate_float(raw: &str) -> Option<Decimal> {
    let value = f64::from_str(raw).ok().filter(|value| value.is_finite())?;
    Decimal::from_f64(value).or(Some(if value.abs() < 1.0 {
        Decimal::ZERO
    } else if value.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_parse_decimal_plain() {
        assert_eq!(parse_decimal("1.5"), Some(Decimal::new(15, 1)));
    }

    #[test]
    fn test_parse_decimal_surrounding_whitespace() {
        assert_eq!(parse_decimal(" 0.25\n"), Some(Decimal::new(25, 2)));
    }

    #[test]
    fn test_parse_decimal_scientific() {
        assert_eq!(parse_decimal("1e-8"), Some(Decimal::new(1, 8)));
    }

    #[test]
    fn test_parse_decimal_garbage() {
        assert_eq!(parse_decimal("N/A"), None);
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("inf"), None);
        assert_eq!(parse_decimal("NaN"), None);
    }

    #[test]
    fn test_parse_decimal_out_of_range_saturates() {
        assert_eq!(parse_decimal("1e100"), Some(Decimal::MAX));
        assert_eq!(parse_decimal("-1e100"), Some(Decimal::MIN));
        assert_eq!(
            parse_decimal("123456789012345678901234567890"),
            Some(Decimal::MAX)
        );
        assert!(parse_decimal("1e100") > parse_decimal("79228162514264337593543950334"));
    }

    #[test]
    fn test_balance_accessors() {
        let balance = Balance::new("ETH", "bittrex #2", ExchangeBalance::new("3", "0.21"));
        assert_eq!(balance.symbol(), "ETH");
        assert_eq!(balance.exchange(), "bittrex #2");
        assert_eq!(balance.amount(), "3");
        assert_eq!(balance.btc_value(), "0.21");
        assert_eq!(balance.btc_decimal(), Some(Decimal::new(21, 2)));
    }
}
