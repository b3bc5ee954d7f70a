pub mod gateway_client;
pub mod registry;

pub use gateway_client::GatewayClient;
pub use registry::ClientRegistry;
