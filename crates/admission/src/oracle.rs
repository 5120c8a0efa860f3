//! Ownership-verification oracle capability.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use bazaar_token::OwnershipProof;

/// Errors reaching or waiting on the oracle. Distinct from a definitive
/// `false` verdict, which means the proof itself is bad.
#[derive(Debug, Clone, Error)]
pub enum OracleError {
    /// Transport-level failure talking to the verification service.
    #[error("oracle transport: {0}")]
    Transport(String),

    /// The per-output timeout elapsed before the oracle answered.
    #[error("oracle timed out")]
    TimedOut,
}

/// Interface to the external ownership-verification service.
///
/// Injected into the pipeline so deployments can point at different
/// verification backends and tests can simulate pass/fail/timeout without
/// any network.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait OwnershipVerifier: Send + Sync {
    /// Checks an ownership proof with the verification service.
    ///
    /// `Ok(false)` is a definitive rejection; `Err` means the service could
    /// not be consulted.
    async fn verify_ownership(&self, proof: &OwnershipProof) -> Result<bool, OracleError>;

    /// Checks an asset identifier against the protocol's grammar.
    fn validate_asset_id(&self, asset_id: &str) -> bool;
}
