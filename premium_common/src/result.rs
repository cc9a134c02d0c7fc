//! Result type alias shared across the workspace.
//!
//! Defaults the error type to the common `PremiumError`, so functions can simply
//! return `Result<T>`.
use crate::error::PremiumError;

/// Workspace-wide `Result` alias with `PremiumError` as the default error.
pub type Result<T, E = PremiumError> = std::result::Result<T, E>;
