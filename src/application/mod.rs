pub mod aggregator;
pub mod balance_fetcher;
pub mod service;
