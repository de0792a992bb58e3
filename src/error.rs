// src/error.rs

//! Crate-wide error type and result alias

use crate::constraints::Violation;
use thiserror::Error;

/// Errors surfaced by the ordering core
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying persistence failure; always surfaced, never retried here
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Filesystem failure while preparing the database location
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// No dish with that name and size exists in the catalog
    #[error("dish not found: {name} ({size})")]
    DishNotFound { name: String, size: String },

    /// No such order exists for the requesting user
    #[error("order {0} not found")]
    OrderNotFound(i64),

    /// The requested ingredient selection violates a catalog constraint
    #[error(transparent)]
    Rejected(#[from] Violation),

    /// Cancellation attempted without the elevated trust flag
    #[error("order cancellation requires two-factor authentication")]
    Forbidden,

    /// Malformed decimal price text
    #[error("invalid price: {0}")]
    InvalidPrice(String),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
