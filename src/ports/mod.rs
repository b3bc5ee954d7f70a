pub mod application_service;
pub mod cancel_context;
pub mod exchange_client;

pub use application_service::*;
pub use cancel_context::*;
pub use exchange_client::*;
