// src/error.rs

//! Error types for recipe store operations

use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while operating on the recipe store
#[derive(Error, Debug)]
pub enum Error {
    /// A create payload was missing one or more required fields
    #[error("Recipe creation failed: missing required fields: {}", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    /// No live recipe has this id
    #[error("Recipe {0} not found")]
    NotFound(i64),

    /// SQLite failure
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// I/O error (database directory creation etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Database bootstrap failed
    #[error("Initialization error: {0}")]
    InitError(String),

    /// A stored timestamp could not be parsed back
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
