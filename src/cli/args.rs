use clap::Parser;
use strum::IntoEnumIterator;

use crate::{
    domain::{exchange::Exchange, sort::SortKey},
    ports::{CredentialsByExchange, PortfolioRequest},
};

#[derive(Parser, Debug, Default)]
#[command(name = "coinfolio")]
#[command(about = "aggregate your coin balances from multiple coin exchanges")]
#[command(version)]
pub struct Cli {
    /// api key and secret for poloniex (key:secret)
    #[arg(long, value_name = "KEY:SECRET")]
    pub poloniex: Vec<String>,

    /// api key and secret for bittrex (key:secret)
    #[arg(long, value_name = "KEY:SECRET")]
    pub bittrex: Vec<String>,

    /// api key and secret for cryptopia (key:secret)
    #[arg(long, value_name = "KEY:SECRET")]
    pub cryptopia: Vec<String>,

    /// api key and secret for liqui (key:secret)
    #[arg(long, value_name = "KEY:SECRET")]
    pub liqui: Vec<String>,

    /// api key and secret for bitfinex (key:secret)
    #[arg(long, value_name = "KEY:SECRET")]
    pub bitfinex: Vec<String>,

    /// api key and secret for bitgrail (key:secret)
    #[arg(long, value_name = "KEY:SECRET")]
    pub bitgrail: Vec<String>,

    /// Sort keys in priority order, all descending: exchange, symbol, btc, value [default: btc]
    #[arg(long, value_name = "KEYS", value_delimiter = ',', value_parser = parse_sort_key)]
    pub sort: Vec<SortKey>,

    /// Log level (trace, debug, info, warn, error); overrides the configured one
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

fn parse_sort_key(value: &str) -> Result<SortKey, String> {
    value.trim().parse().map_err(|_| {
        let keys: Vec<&str> = SortKey::iter().map(SortKey::name).collect();
        format!("unknown sort key `{value}`, expected one of: {}", keys.join(", "))
    })
}

impl Cli {
    fn values_for(&self, exchange: Exchange) -> &[String] {
        match exchange {
            Exchange::Poloniex => &self.poloniex,
            Exchange::Bittrex => &self.bittrex,
            Exchange::Cryptopia => &self.cryptopia,
            Exchange::Liqui => &self.liqui,
            Exchange::Bitfinex => &self.bitfinex,
            Exchange::Bitgrail => &self.bitgrail,
        }
    }

    /// Credential strings of every exchange flag that was given, empty values included.
    pub fn credentials(&self) -> CredentialsByExchange {
        Exchange::iter()
            .filter_map(|exchange| {
                let values = self.values_for(exchange);
                (!values.is_empty()).then(|| (exchange, values.to_vec()))
            })
            .collect()
    }

    /// `None` when neither an exchange flag nor `--sort` was given, in which case
    /// there is nothing to run and usage should be shown.
    pub fn portfolio_request(&self) -> Option<PortfolioRequest> {
        let credentials = self.credentials();
        if credentials.is_empty() && self.sort.is_empty() {
            return None;
        }
        Some(PortfolioRequest::new(credentials, self.sort.clone()))
    }
}
