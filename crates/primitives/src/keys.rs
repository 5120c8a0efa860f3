//! Hex text forms for compressed secp256k1 public keys.
//!
//! Counterparties exchange identity keys as 33-byte compressed points in
//! lowercase hex, so key comparisons happen on parsed [`PublicKey`] values
//! rather than on strings.

use secp256k1::PublicKey;

use crate::ParseError;

/// Parses a hex-encoded compressed public key.
pub fn parse_compressed_pubkey(s: &str) -> Result<PublicKey, ParseError> {
    let bytes = hex::decode(s)?;
    Ok(PublicKey::from_slice(&bytes)?)
}

/// Lowercase hex of the compressed encoding of a public key.
pub fn pubkey_hex(pk: &PublicKey) -> String {
    hex::encode(pk.serialize())
}
