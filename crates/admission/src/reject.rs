//! Per-output rejection reasons.

use thiserror::Error;

use crate::{assets::AssetListViolation, oracle::OracleError};
use bazaar_crypto::DerivationError;
use bazaar_primitives::ParseError;
use bazaar_token::TokenDecodeError;

/// Why an output was excluded from the admission set.
///
/// These are routine outcomes of an open, adversarial input stream, not
/// pipeline failures; the pipeline reports them per output and moves on.
#[derive(Debug, Clone, Error)]
pub enum RejectionReason {
    /// The output's script is not a well-formed listing token.
    #[error("token decode: {0}")]
    Decode(#[from] TokenDecodeError),

    /// A proof key field does not parse as a public key.
    #[error("proof key unparseable: {0}")]
    BadProofKey(#[from] ParseError),

    /// The key derivation itself failed on the claimed prover key.
    #[error("key derivation: {0}")]
    Derivation(#[from] DerivationError),

    /// The locking key is not the invoice-derived child of the prover key,
    /// so the claimed identity is not the party that locked the output.
    #[error("locking key does not match derived identity key")]
    KeyMismatch,

    /// The proof is addressed to a specific verifier, not to "anyone".
    #[error("ownership proof is not verifiable by anyone")]
    ProofNotForAnyone,

    /// The oracle gave a definitive negative verdict on the proof.
    #[error("ownership proof rejected by oracle")]
    InvalidProof,

    /// The desired-assets map is structurally invalid.
    #[error("desired assets: {0}")]
    InvalidAssetList(#[from] AssetListViolation),

    /// The oracle could not be consulted (transport failure or timeout).
    /// Fails closed to rejection; retry policy belongs to the caller.
    #[error("oracle unavailable: {0}")]
    OracleUnavailable(#[from] OracleError),
}
