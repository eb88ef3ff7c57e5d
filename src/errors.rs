//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Backing content
    // ---------------------------
    #[error("Malformed schedule data: {0}")]
    Format(String),

    // ---------------------------
    // Input / selection errors
    // ---------------------------
    #[error("Invalid entry: {0}")]
    Validation(String),

    #[error("Entry not found: {0}")]
    NotFound(String),

    /// `index` is zero-based; messages show it 1-based like `list --keys`.
    #[error("Entry #{} is out of range (schedule has {len} entries)", .index + 1)]
    OutOfRange { index: usize, len: usize },

    // ---------------------------
    // Remote store
    // ---------------------------
    #[error(
        "Conflict: the schedule was changed by someone else since it was loaded ({0}). Reload and retry."
    )]
    Conflict(String),

    #[error("Remote store error: {0}")]
    Transport(String),

    // ---------------------------
    // Session gate
    // ---------------------------
    #[error("Access denied: wrong or missing password")]
    Unauthorized,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Transport(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
