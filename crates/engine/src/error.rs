//! The module contains the errors the engine can throw.
//!
//! Display strings double as the HTTP error messages, so they must stay
//! stable: clients match on "Missing required fields" and
//! "Already applied to this scholarship" verbatim.

use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A required field was absent or falsy (empty string, zero). The payload
    /// names the offending field for logging; the message on the wire is the
    /// generic one the API has always returned.
    #[error("Missing required fields")]
    MissingField(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("Already applied to this scholarship")]
    AlreadyApplied,
    /// A stored criteria document failed to decode.
    #[error("invalid criteria document: {0}")]
    Criteria(#[from] serde_json::Error),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MissingField(a), Self::MissingField(b)) => a == b,
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (Self::AlreadyApplied, Self::AlreadyApplied) => true,
            (Self::Criteria(a), Self::Criteria(b)) => a.to_string() == b.to_string(),
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
