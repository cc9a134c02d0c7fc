//! Error types shared by the library and the CLI.
//!
//! `PremiumError` covers three families of failure: the request itself
//! (transport or HTTP status), a response that does not have the expected shape,
//! and missing or unusable inputs to the premium formula. None of them are fatal;
//! callers log them and carry on with an absent value.
use reqwest::StatusCode;
use thiserror::Error;

use crate::source::Source;

/// Unified error type for fetching quotes and computing the premium.
#[derive(Error, Debug)]
pub enum PremiumError {
    /// Transport-level failure reported by `reqwest` (DNS, TLS, connection, body read).
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream answered with a non-success status code.
    #[error("HTTP status {status} from {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// Status code returned by the server.
        status: StatusCode,
    },

    /// Failure while decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An expected field is absent from an otherwise valid JSON response.
    #[error("{upstream} response is missing field `{field}`")]
    MissingField {
        /// Upstream that produced the response.
        upstream: Source,
        /// Dotted path of the missing field.
        field: &'static str,
    },

    /// A field is present but does not hold a decimal number.
    #[error("{upstream} returned a non-numeric value: {value}")]
    InvalidNumber {
        /// Upstream that produced the value.
        upstream: Source,
        /// Raw text of the rejected value.
        value: String,
    },

    /// One or more of the required quotes could not be obtained.
    #[error("Missing upstream data: {0}")]
    MissingUpstream(String),

    /// A calculator input is zero, negative or not finite.
    #[error("Invalid {name}: {value}")]
    InvalidPrice {
        /// Which input was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
