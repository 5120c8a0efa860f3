//! Key derivation for the marketplace overlay.
//!
//! Implements the invoice-numbered child key derivation used to bind a
//! seller's identity key to the key that locks a listing output. Both sides
//! of a listing compute the same derivation independently, so this must be
//! bit-exact.

mod derivation;

pub use derivation::{derive_child_pubkey, keypair_from_secret_hex, DerivationError};
