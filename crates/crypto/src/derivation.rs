//! Invoice-numbered child key derivation.
//!
//! The derivation takes a sender secret key, a recipient public key, and an
//! invoice number string. The tweak is `HMAC-SHA256(key = compressed ECDH
//! point, msg = invoice number)` and the child key is `recipient + tweak*G`.
//! The sender-side secret derivation (`recipient_secret + tweak`) is not
//! needed here; admission only ever recomputes public keys.

use hmac::{Hmac, Mac};
use secp256k1::{PublicKey, Scalar, SecretKey, SECP256K1};
use sha2::Sha256;
use thiserror::Error;

use bazaar_primitives::ParseError;

type HmacSha256 = Hmac<Sha256>;

/// Errors from the child key derivation.
#[derive(Debug, Clone, Error)]
pub enum DerivationError {
    /// A tweak operation produced an invalid key. Happens with negligible
    /// probability for honest inputs, but adversarial inputs reach this path.
    #[error("key tweak failed: {0}")]
    Tweak(#[from] secp256k1::Error),

    /// The HMAC output is not a valid scalar (>= the curve order).
    #[error("derived tweak out of range")]
    TweakOutOfRange,
}

/// Derives the child public key for `recipient_pk` under the given sender
/// key and invoice number.
///
/// Deterministic and pure; any divergence from counterparties' computation
/// breaks interoperability, so nothing here depends on configuration beyond
/// the explicit arguments.
pub fn derive_child_pubkey(
    sender_sk: &SecretKey,
    recipient_pk: &PublicKey,
    invoice_number: &str,
) -> Result<PublicKey, DerivationError> {
    let shared_point = recipient_pk.mul_tweak(SECP256K1, &Scalar::from(*sender_sk))?;

    let mut mac = HmacSha256::new_from_slice(&shared_point.serialize())
        .expect("hmac accepts any key length");
    mac.update(invoice_number.as_bytes());
    let digest: [u8; 32] = mac.finalize().into_bytes().into();

    let tweak = Scalar::from_be_bytes(digest).map_err(|_| DerivationError::TweakOutOfRange)?;
    Ok(recipient_pk.add_exp_tweak(SECP256K1, &tweak)?)
}

/// Parses a hex secret key into a keypair.
pub fn keypair_from_secret_hex(sk_hex: &str) -> Result<(SecretKey, PublicKey), ParseError> {
    let bytes = hex::decode(sk_hex)?;
    let sk = SecretKey::from_slice(&bytes)?;
    let pk = PublicKey::from_secret_key(SECP256K1, &sk);
    Ok((sk, pk))
}
