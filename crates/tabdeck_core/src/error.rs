//! Application error types for Tabdeck.
use thiserror::Error;

/// Top-level application error type.
///
/// The simulated panel operations cannot fail, so this type only covers the
/// HTTP surface and process wiring (server spawn, bad requests).
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found")]
    NotFound,

    #[error("Server error: {0}")]
    Server(String),

    #[error("Internal server error")]
    Internal,
}
