//! Lock script to token field decoding.

use bitcoin::{opcodes::all::{OP_2DROP, OP_CHECKSIG, OP_DROP}, script::Instruction, Opcode, Script};
use secp256k1::PublicKey;
use thiserror::Error;

use crate::proof::OwnershipProof;

/// Errors decoding a lock script into a token.
///
/// All of these are expected outcomes on an open input stream; anyone can
/// put anything in an output script.
#[derive(Debug, Clone, Error)]
pub enum TokenDecodeError {
    /// The script does not start with a data push for the locking key.
    #[error("script does not start with a locking key push")]
    MissingLockingKey,

    /// The leading push is not a valid compressed public key.
    #[error("locking key push is not a valid pubkey: {0}")]
    InvalidLockingKey(secp256k1::Error),

    /// The opcode after the locking key is not OP_CHECKSIG.
    #[error("expected OP_CHECKSIG after locking key")]
    MissingChecksig,

    /// An opcode other than the trailing drops appeared among the fields.
    #[error("unexpected opcode in field section: {0}")]
    UnexpectedOpcode(Opcode),

    /// The script iterator hit a malformed push (truncated length prefix).
    #[error("malformed script: {0}")]
    MalformedScript(String),

    /// Fewer fields than the protocol minimum (proof + desired assets).
    #[error("token has {0} fields, expected at least 2")]
    InsufficientFields(usize),

    /// A field that should hold UTF-8 text does not.
    #[error("field {0} is not valid utf8")]
    FieldNotUtf8(usize),

    /// The ownership proof field is not the expected JSON shape.
    #[error("ownership proof field is not valid json: {0}")]
    BadProofJson(String),
}

/// A decoded listing token: ordered opaque fields plus the locking key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedToken {
    fields: Vec<Vec<u8>>,
    locking_pubkey: PublicKey,
}

impl DecodedToken {
    pub fn fields(&self) -> &[Vec<u8>] {
        &self.fields
    }

    pub fn locking_pubkey(&self) -> &PublicKey {
        &self.locking_pubkey
    }

    /// Parses field 0 as the seller's ownership proof.
    pub fn ownership_proof(&self) -> Result<OwnershipProof, TokenDecodeError> {
        let text = core::str::from_utf8(&self.fields[0])
            .map_err(|_| TokenDecodeError::FieldNotUtf8(0))?;
        serde_json::from_str(text).map_err(|e| TokenDecodeError::BadProofJson(e.to_string()))
    }

    /// Raw bytes of the desired-assets map (field 1). Decoding is left to
    /// the asset list validator.
    pub fn desired_assets_bytes(&self) -> &[u8] {
        &self.fields[1]
    }

    /// Optional listing description (field 2), if present and textual.
    pub fn description(&self) -> Option<&str> {
        self.fields.get(2).and_then(|f| core::str::from_utf8(f).ok())
    }
}

/// Decodes a lock script into a [`DecodedToken`].
///
/// Requires the `<pubkey> OP_CHECKSIG` prefix, then collects every data push
/// as a field. Trailing OP_DROP/OP_2DROP opcodes are accepted anywhere after
/// the prefix; any other opcode fails the decode.
pub fn decode_token(script: &Script) -> Result<DecodedToken, TokenDecodeError> {
    let mut instructions = script.instructions();

    let locking_pubkey = match instructions.next() {
        Some(Ok(Instruction::PushBytes(push))) => PublicKey::from_slice(push.as_bytes())
            .map_err(TokenDecodeError::InvalidLockingKey)?,
        Some(Err(e)) => return Err(TokenDecodeError::MalformedScript(e.to_string())),
        _ => return Err(TokenDecodeError::MissingLockingKey),
    };

    match instructions.next() {
        Some(Ok(Instruction::Op(op))) if op == OP_CHECKSIG => {}
        Some(Err(e)) => return Err(TokenDecodeError::MalformedScript(e.to_string())),
        _ => return Err(TokenDecodeError::MissingChecksig),
    }

    let mut fields = Vec::new();
    for instruction in instructions {
        match instruction {
            Ok(Instruction::PushBytes(push)) => fields.push(push.as_bytes().to_vec()),
            Ok(Instruction::Op(op)) if op == OP_DROP || op == OP_2DROP => {}
            Ok(Instruction::Op(op)) => return Err(TokenDecodeError::UnexpectedOpcode(op)),
            Err(e) => return Err(TokenDecodeError::MalformedScript(e.to_string())),
        }
    }

    if fields.len() < 2 {
        return Err(TokenDecodeError::InsufficientFields(fields.len()));
    }

    Ok(DecodedToken {
        fields,
        locking_pubkey,
    })
}
