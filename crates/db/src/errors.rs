//! Database error types.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum DbError {
    #[error("IO Error: {0}")]
    IoError(String),

    #[error("operation timed out")]
    TimedOut,

    #[error("{0}")]
    Other(String),
}

pub type DbResult<T> = Result<T, DbError>;
