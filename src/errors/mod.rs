// Error types shared by handlers, extractors and the storage layer.
use thiserror::Error;

pub mod response;
pub mod store;

pub use store::{StoreError, StoreResult};

#[derive(Error, Debug)]
pub enum AppError {
    // 401: missing, malformed or forged credentials
    #[error("{0}")]
    Unauthorized(String),

    // 403: role or ownership violation
    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    InvalidId(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    // The #[from] attribute lets `?` lift storage failures straight out of handlers.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

pub type AppResult<T> = Result<T, AppError>;
