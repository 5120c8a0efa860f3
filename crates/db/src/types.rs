//! Stored record types.

use serde::{Deserialize, Serialize};

use bazaar_primitives::OutputRef;

/// A tracked marketplace listing, one per admitted UTXO.
///
/// The proof and accepted-assets fields hold the raw JSON text from the
/// token so the record can be served back to clients byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    /// The UTXO carrying the listing token.
    pub output: OutputRef,

    /// Seller identity key (the proof's prover), hex compressed.
    pub seller: String,

    /// Asset being offered.
    pub asset_id: String,

    /// Amount of the asset being offered.
    pub amount: i64,

    /// Raw JSON ownership proof.
    pub proof: String,

    /// Raw JSON desired-assets map.
    pub accepted_assets: String,

    /// Optional listing description.
    pub description: Option<String>,
}
