//! Error types for the brand catalog service
//!
//! Errors are split by layer the way the rest of the crate is: repository
//! errors stay behind the `BrandRepository` seam and are converted into a
//! generic envelope at the service boundary, so nothing below the web layer
//! ever surfaces internal detail to a caller.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors (bad file, bad listen address)
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Dataset load or parse failures at startup
    #[error("Dataset error: {message}")]
    Dataset { message: String },

    /// Repository layer errors
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Repository layer specific errors
///
/// The in-memory store cannot fail on the happy path; the variant exists so
/// the trait contract carries a real error channel (and so test fakes can
/// exercise the failure classification in the lookup service).
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Dataset store could not be read
    #[error("Dataset store unavailable: {message}")]
    Unavailable { message: String },
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;
