//! Configuration utilities.

/// TOML configuration loading.
pub mod config;

pub use config::CitecheckConfig;
