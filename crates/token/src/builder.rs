//! Listing token script construction.

use bitcoin::{
    opcodes::all::{OP_2DROP, OP_CHECKSIG, OP_DROP},
    script::{self, PushBytesBuf},
    ScriptBuf,
};
use secp256k1::PublicKey;

/// Builds a `<pubkey> OP_CHECKSIG <field>... OP_2DROP/OP_DROP...` lock
/// script carrying the given fields.
pub fn build_listing_script(
    locking_pubkey: &PublicKey,
    fields: &[Vec<u8>],
) -> anyhow::Result<ScriptBuf> {
    let mut builder = script::Builder::new()
        .push_slice(PushBytesBuf::try_from(locking_pubkey.serialize().to_vec())?)
        .push_opcode(OP_CHECKSIG);

    for field in fields {
        builder = builder.push_slice(PushBytesBuf::try_from(field.clone())?);
    }

    // Drop the pushed fields so the script evaluates down to the checksig.
    let mut remaining = fields.len();
    while remaining >= 2 {
        builder = builder.push_opcode(OP_2DROP);
        remaining -= 2;
    }
    if remaining == 1 {
        builder = builder.push_opcode(OP_DROP);
    }

    Ok(builder.into_script())
}
