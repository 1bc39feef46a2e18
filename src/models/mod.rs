// src/models/mod.rs

//! Data structures shared across the crate.

mod config;
mod record;

// Re-export all public types
pub use config::{Config, LoggingConfig, NavigationConfig, ResolverConfig};
pub use record::{Query, QueryMap, QueryValue, UrlRecord};
