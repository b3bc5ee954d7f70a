pub mod balance;
pub mod credential;
pub mod exchange;
pub mod sort;

// Re-export commonly used types
pub use balance::*;
pub use credential::*;
pub use exchange::*;
pub use sort::*;
