//! Domain error model.

use thiserror::Error;

/// Result type used across the replenishment core.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure in the replenishment pipeline is a deterministic caller-input
/// problem, so nothing here is retryable and nothing is silently corrected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Thresholds were supplied in an invalid relative order (critical >= low).
    #[error("configuration error: critical threshold ({critical}) must be below low threshold ({low})")]
    Configuration { critical: u64, low: u64 },

    /// A field carried a value outside its domain (negative quantity, bad rate, ...).
    #[error("invalid input: {field} = {value}")]
    InvalidInput { field: &'static str, value: String },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn configuration(critical: u64, low: u64) -> Self {
        Self::Configuration { critical, low }
    }

    pub fn invalid_input(field: &'static str, value: impl core::fmt::Display) -> Self {
        Self::InvalidInput {
            field,
            value: value.to_string(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Name of the offending field, when the error is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DomainError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }
}
