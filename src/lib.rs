pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod ports;
pub mod prettyprint;

#[cfg(test)]
mod testing;
