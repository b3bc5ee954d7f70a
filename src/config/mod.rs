pub mod app_config;
pub mod gateway_config;

pub use app_config::*;
pub use gateway_config::*;
