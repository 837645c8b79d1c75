//! Core domain types and the listing filter-and-sort engine for the uogos
//! berry marketplace.
//!
//! The engine ([`filter_and_sort`], [`unique_cities`]) is pure and
//! synchronous: it consumes listings that have already been fetched,
//! performs no I/O, and never mutates its input. Everything network-facing
//! lives in the sibling client crate.

pub mod app_config;
mod collation;
pub mod config;
pub mod filter;
pub mod listing;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use filter::{filter_and_sort, unique_cities, ListingFilters, SortKey};
pub use listing::{Category, Listing, ListingStatus, Unit};

use thiserror::Error;

/// Errors produced while loading application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was set to a value that does not parse.
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
