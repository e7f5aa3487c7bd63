//! Banyan Core — configuration and shared error types.

pub mod config;
pub mod error;

pub use config::{ApiConfig, DataPaths};
pub use error::{Error, Result};
