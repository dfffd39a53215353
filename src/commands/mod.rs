//! Command implementations for the CLI
//!
//! - start: Start the HTTP server
//! - quote: Calculate a charging cost locally
//! - test: Test configuration validity
//! - config: Display the effective configuration

pub mod config;
pub mod quote;
pub mod start;
