use std::io::Write;

use rust_decimal::Decimal;

use crate::domain::balance::Balance;

use super::table::Table;

pub const HEADERS: [&str; 4] = ["Exchange", "Symbol", "Value", "BTC Value"];

/// Sum of all BTC values. Values that do not parse count as zero; a sum beyond
/// `Decimal`'s range saturates.
pub fn total_btc(balances: &[Balance]) -> Decimal {
    balances
        .iter()
        .map(|balance| balance.btc_decimal().unwrap_or(Decimal::ZERO))
        .fold(Decimal::ZERO, |total, value| {
            total.checked_add(value).unwrap_or(if value.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            })
        })
}

pub fn format_btc(value: Decimal, precision: u32) -> String {
    format!(
        "{:.prec$} BTC",
        value.round_dp(precision),
        prec = precision as usize
    )
}

/// Table of balances in the given order followed by the BTC total.
pub fn balance_table(balances: &[Balance], precision: u32) -> Table {
    let mut table = Table::new(HEADERS);
    for balance in balances {
        table.add_row([
            balance.exchange(),
            balance.symbol(),
            balance.amount(),
            balance.btc_value(),
        ]);
    }

    let total = format_btc(total_btc(balances), precision);
    table.set_footer(["", "Total", "", total.as_str()]);
    table
}

pub fn render_balances<W: Write>(
    writer: &mut W,
    balances: &[Balance],
    precision: u32,
) -> std::io::Result<()> {
    writer.write_all(balance_table(balances, precision).render().as_bytes())?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::balance::ExchangeBalance;

    fn balance(exchange: &str, symbol: &str, amount: &str, btc: &str) -> Balance {
        Balance::new(symbol, exchange, ExchangeBalance::new(amount, btc))
    }

    #[test]
    fn test_total_ignores_row_order() {
        let mut balances = vec![
            balance("poloniex", "BTC", "1.5", "1.5"),
            balance("bittrex", "ETH", "30", "2.5"),
            balance("liqui", "DOGE", "0", "0.0"),
        ];
        assert_eq!(format_btc(total_btc(&balances), 2), "4.00 BTC");

        balances.reverse();
        assert_eq!(format_btc(total_btc(&balances), 2), "4.00 BTC");
        assert_eq!(format_btc(total_btc(&balances), 8), "4.00000000 BTC");
    }

    #[test]
    fn test_unparseable_btc_value_counts_as_zero() {
        let balances = vec![
            balance("poloniex", "BTC", "1", "1.25"),
            balance("poloniex", "???", "1", "not a number"),
        ];
        assert_eq!(total_btc(&balances), Decimal::new(125, 2));
    }

    #[test]
    fn test_total_saturates_instead_of_overflowing() {
        let balances = vec![
            balance("poloniex", "BTC", "1", "79228162514264337593543950335"),
            balance("bittrex", "BTC", "1", "1"),
            balance("liqui", "BTC", "1", "1e100"),
        ];
        assert_eq!(total_btc(&balances), Decimal::MAX);

        let negative = vec![
            balance("poloniex", "BTC", "1", "-79228162514264337593543950335"),
            balance("bittrex", "BTC", "1", "-1"),
        ];
        assert_eq!(total_btc(&negative), Decimal::MIN);
    }

    #[test]
    fn test_format_btc_rounds() {
        assert_eq!(format_btc(Decimal::new(123456789, 9), 8), "0.12345679 BTC");
        assert_eq!(format_btc(Decimal::ZERO, 2), "0.00 BTC");
    }

    fn render(balances: &[Balance], precision: u32) -> String {
        let mut output = Vec::new();
        render_balances(&mut output, balances, precision).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_render_balances() {
        let rendered = render(
            &[
                balance("poloniex", "BTC", "1.5", "1.5"),
                balance("bittrex #2", "ETH", "30", "2.5"),
            ],
            2,
        );

        assert_eq!(
            rendered,
            "+------------+--------+-------+-----------+\n\
             | Exchange   | Symbol | Value | BTC Value |\n\
             +------------+--------+-------+-----------+\n\
             | poloniex   | BTC    | 1.5   | 1.5       |\n\
             | bittrex #2 | ETH    | 30    | 2.5       |\n\
             +------------+--------+-------+-----------+\n\
             |            | Total  |       | 4.00 BTC  |\n\
             +------------+--------+-------+-----------+\n"
        );
    }

    #[test]
    fn test_render_empty_portfolio() {
        let rendered = render(&[], 2);
        assert!(rendered.contains("| Exchange | Symbol | Value | BTC Value |"));
        assert!(rendered.contains("0.00 BTC"));
    }
}
