//! Listing token encoding and decoding.
//!
//! A listing token is a lock script of the form
//! `<pubkey> OP_CHECKSIG <field>... OP_2DROP/OP_DROP...` carrying an ordered
//! list of opaque data fields next to the key that must sign to spend the
//! output. Field positions are fixed by the marketplace protocol: field 0 is
//! a JSON ownership proof, field 1 is the JSON desired-assets map, field 2
//! is an optional human-readable description.

mod builder;
mod decode;
mod proof;

pub use builder::build_listing_script;
pub use decode::{decode_token, DecodedToken, TokenDecodeError};
pub use proof::OwnershipProof;
