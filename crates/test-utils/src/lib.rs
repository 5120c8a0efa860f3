//! Fixture helpers for marketplace overlay tests.
//!
//! Builds listing tokens whose locking keys are correctly derived from a
//! seller identity, so tests can exercise the happy path without standing
//! up any real wallet machinery.

use bitcoin::ScriptBuf;
use secp256k1::{PublicKey, SecretKey, SECP256K1};
use serde_json::json;

use bazaar_crypto::{derive_child_pubkey, keypair_from_secret_hex};
use bazaar_primitives::pubkey_hex;
use bazaar_token::build_listing_script;

/// The conventional "anyone" secret key hex.
pub const ANYONE_SECRET_HEX: &str =
    "0000000000000000000000000000000000000000000000000000000000000001";

/// Deterministic seller keypair from a seed byte.
pub fn seller_keypair(seed: u8) -> (SecretKey, PublicKey) {
    let sk = SecretKey::from_slice(&[seed; 32]).expect("valid secret key");
    let pk = PublicKey::from_secret_key(SECP256K1, &sk);
    (sk, pk)
}

/// The conventional "anyone" keypair.
pub fn anyone_keypair() -> (SecretKey, PublicKey) {
    keypair_from_secret_hex(ANYONE_SECRET_HEX).expect("valid anyone key")
}

/// JSON ownership proof with the given prover/verifier keys and a dummy
/// proof payload.
pub fn listing_proof_json(
    prover: &PublicKey,
    verifier: &PublicKey,
    asset_id: &str,
    amount: i64,
) -> String {
    json!({
        "prover": pubkey_hex(prover),
        "verifier": pubkey_hex(verifier),
        "assetId": asset_id,
        "amount": amount,
        "sigs": ["00ff"],
    })
    .to_string()
}

/// Builds a listing token locked to the invoice-derived child of
/// `seller_pk`.
pub fn build_listing_token(
    seller_pk: &PublicKey,
    anyone_sk: &SecretKey,
    invoice_number: &str,
    proof_json: &[u8],
    assets_json: &[u8],
    description: Option<&str>,
) -> ScriptBuf {
    let locking_pk =
        derive_child_pubkey(anyone_sk, seller_pk, invoice_number).expect("derivable key");

    let mut fields = vec![proof_json.to_vec(), assets_json.to_vec()];
    if let Some(desc) = description {
        fields.push(desc.as_bytes().to_vec());
    }

    build_listing_script(&locking_pk, &fields).expect("buildable script")
}
