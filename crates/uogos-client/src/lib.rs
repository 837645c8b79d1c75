//! Typed HTTP client for the uogos marketplace backend.
//!
//! Wraps `reqwest` with backend-specific error handling and typed response
//! deserialization. The client covers the read endpoints the listing browser
//! consumes; filtering and sorting always happen client-side through
//! `uogos-core`, never as backend query parameters.

mod client;
mod error;

pub use client::MarketClient;
pub use error::ClientError;
