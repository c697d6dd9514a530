pub mod formatting;
pub mod config;
pub mod logging;

// Re-exports
pub use config::*;
