//! Shared leaf types for the marketplace overlay.

mod errors;
mod keys;
mod output_ref;

pub use errors::ParseError;
pub use keys::{parse_compressed_pubkey, pubkey_hex};
pub use output_ref::{OutputRef, TxOutput};
