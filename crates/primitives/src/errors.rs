//! Errors during parsing/handling of overlay primitives.

use thiserror::Error;

/// Parsing errors for keys, txids, and other text-encoded primitives.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// The supplied pubkey bytes are not a valid curve point.
    #[error("supplied pubkey is invalid")]
    InvalidPubkey(#[from] secp256k1::Error),

    /// The supplied string is not valid hex.
    #[error("malformed hex: {0}")]
    MalformedHex(#[from] hex::FromHexError),

    /// The supplied txid string could not be parsed.
    #[error("supplied txid is invalid")]
    InvalidTxid(#[from] bitcoin::hashes::hex::HexToArrayError),
}
