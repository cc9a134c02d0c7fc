//!
//! Common types and utilities for the kimchi premium calculator.
//!
//! This crate aggregates:
//! - `error` — unified error type `PremiumError` used across the workspace.
//! - `result` — handy `Result<T, PremiumError>` alias.
//! - `source` — identifiers of the upstream services a value came from.
//! - `net` — upstream URLs, request headers and the `Endpoints` configuration.
//! - `fetcher` — the `JsonFetcher` seam and its blocking HTTP implementation.
//! - `quote` — quote/exchange-rate models and the accessors that extract them.
//! - `premium` — the premium formula and the end-to-end calculation.
#![warn(missing_docs)]
pub mod error;
pub mod fetcher;
pub mod net;
pub mod premium;
pub mod quote;
pub mod result;
pub mod source;

pub use error::PremiumError;
pub use premium::{PremiumReport, calculate_kimchi};
pub use result::Result;
