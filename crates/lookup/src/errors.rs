//! Lookup-side error types.

use thiserror::Error;

use bazaar_db::DbError;
use bazaar_token::TokenDecodeError;

/// Errors ingesting an output event into the index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The output script is not a listing token. Should not happen for
    /// outputs that passed admission.
    #[error("token decode: {0}")]
    Decode(#[from] TokenDecodeError),

    /// Storage failure.
    #[error("db: {0}")]
    Db(#[from] DbError),
}

/// Errors answering a lookup query. These indicate caller misuse and are
/// surfaced directly rather than converted to empty results.
#[derive(Debug, Error)]
pub enum LookupError {
    /// No recognized query parameters were supplied.
    #[error("query must include txid+vout, findAll, seller, or assetId")]
    MissingQuery,

    /// More than one recognized parameter combination was supplied.
    #[error("query parameters are ambiguous, supply exactly one combination")]
    AmbiguousQuery,

    /// A txid was supplied without a vout, or vice versa.
    #[error("txid and vout must be supplied together")]
    PartialOutpoint,

    /// A parameter has the wrong type or encoding.
    #[error("invalid query parameter {0:?}")]
    InvalidParameter(&'static str),

    /// Storage failure.
    #[error("db: {0}")]
    Db(#[from] DbError),
}
