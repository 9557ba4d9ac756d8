//! Core configuration and utilities for the RusToK admin client.
//!
//! This crate holds everything the other client crates share but that is
//! not session- or locale-specific: the client [`Config`], filesystem
//! [`Paths`], logging initialization, and the core error type.

mod config;
mod error;
mod logging;
mod paths;

pub use config::{Config, DEFAULT_API_URL, DEFAULT_LOG_LEVEL};
pub use error::{CoreError, CoreResult};
pub use logging::{init_logging, parse_level};
pub use paths::Paths;
