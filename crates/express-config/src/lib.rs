//! # Express Config
//!
//! Configuration management for Early Express services.
//! Supports layered configuration from files and environment variables,
//! runtime refresh, and up-front validation.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
