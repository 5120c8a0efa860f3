//! Ownership proof payload.

use secp256k1::PublicKey;
use serde::{Deserialize, Serialize};

use bazaar_primitives::{parse_compressed_pubkey, ParseError};

/// A seller's claim, checkable by a third party, that they control a given
/// asset. Parsed from token field 0.
///
/// The prover and verifier keys are hex compressed points. Everything beyond
/// the fields named here is opaque proof material that gets handed to the
/// ownership oracle untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipProof {
    /// Identity key of the party claiming ownership (the seller).
    pub prover: String,

    /// Key the proof is addressed to. The marketplace protocol requires
    /// this to be the public "anyone" key.
    pub verifier: String,

    /// Asset the proof covers.
    #[serde(rename = "assetId")]
    pub asset_id: String,

    /// Amount of the asset covered by the proof.
    pub amount: i64,

    /// Opaque remainder of the proof payload.
    #[serde(flatten)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

impl OwnershipProof {
    /// Parses the prover field as a compressed public key.
    pub fn prover_key(&self) -> Result<PublicKey, ParseError> {
        parse_compressed_pubkey(&self.prover)
    }

    /// Parses the verifier field as a compressed public key.
    pub fn verifier_key(&self) -> Result<PublicKey, ParseError> {
        parse_compressed_pubkey(&self.verifier)
    }
}
