//! Pipeline and oracle configuration.
//!
//! The protocol's well-known values ("anyone" key, invoice number, service
//! hosts) are deliberately config fields rather than embedded constants, so
//! alternate deployments and tests can swap them without recompiling.

use serde::{Deserialize, Serialize};

/// Default confederacy overlay endpoint.
const DEFAULT_CONFEDERACY_HOST: &str = "https://confederacy.babbage.systems";

/// Default peer messaging endpoint.
const DEFAULT_PEER_SERV_HOST: &str = "https://peerserv.babbage.systems";

/// Default message box name.
const DEFAULT_MESSAGE_BOX: &str = "marketplace-box";

/// Default protocol / basket / topic name.
const DEFAULT_PROTOCOL_NAME: &str = "marketplace";

/// Default satoshi threshold for oracle verification.
const DEFAULT_SATOSHI_THRESHOLD: u64 = 1000;

/// Invoice number binding listing keys to this protocol context.
const DEFAULT_INVOICE_NUMBER: &str = "2-marketplace-1";

/// The conventional "anyone" secret key: 32 bytes, all zero but the last.
/// Its public key is the generator point, known to every party.
const DEFAULT_ANYONE_SECRET_HEX: &str =
    "0000000000000000000000000000000000000000000000000000000000000001";

/// Default bound on concurrent in-flight oracle checks.
const DEFAULT_MAX_CONCURRENT_CHECKS: usize = 8;

/// Default per-output oracle timeout in milliseconds.
const DEFAULT_ORACLE_TIMEOUT_MS: u64 = 5_000;

/// Connection parameters for the ownership-verification oracle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Confederacy overlay host the oracle checks proofs against.
    #[serde(default = "default_confederacy_host")]
    pub confederacy_host: String,

    /// Peer messaging host.
    #[serde(default = "default_peer_serv_host")]
    pub peer_serv_host: String,

    /// Message box the oracle reads offers from.
    #[serde(default = "default_message_box")]
    pub message_box: String,

    /// Protocol identifier.
    #[serde(default = "default_protocol_name")]
    pub protocol_id: String,

    /// Basket name.
    #[serde(default = "default_protocol_name")]
    pub basket: String,

    /// Topic this oracle serves.
    #[serde(default = "default_protocol_name")]
    pub topic: String,

    /// Satoshi threshold for token outputs.
    #[serde(default = "default_satoshi_threshold")]
    pub satoshi_threshold: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            confederacy_host: default_confederacy_host(),
            peer_serv_host: default_peer_serv_host(),
            message_box: default_message_box(),
            protocol_id: default_protocol_name(),
            basket: default_protocol_name(),
            topic: default_protocol_name(),
            satoshi_threshold: default_satoshi_threshold(),
        }
    }
}

/// Configuration for the admission pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdmissionConfig {
    /// Oracle connection parameters.
    #[serde(default)]
    pub oracle: OracleConfig,

    /// Invoice number used in the listing key derivation.
    #[serde(default = "default_invoice_number")]
    pub invoice_number: String,

    /// Hex secret key of the public "anyone" identity.
    #[serde(default = "default_anyone_secret_hex")]
    pub anyone_secret_hex: String,

    /// Maximum number of outputs checked concurrently. The oracle round
    /// trip dominates, so this bounds oracle load.
    #[serde(default = "default_max_concurrent_checks")]
    pub max_concurrent_checks: usize,

    /// Per-output timeout around the oracle call, in milliseconds.
    /// A timeout rejects the output rather than stalling the transaction.
    #[serde(default = "default_oracle_timeout_ms")]
    pub oracle_timeout_ms: u64,
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            oracle: OracleConfig::default(),
            invoice_number: default_invoice_number(),
            anyone_secret_hex: default_anyone_secret_hex(),
            max_concurrent_checks: default_max_concurrent_checks(),
            oracle_timeout_ms: default_oracle_timeout_ms(),
        }
    }
}

fn default_confederacy_host() -> String {
    DEFAULT_CONFEDERACY_HOST.to_owned()
}

fn default_peer_serv_host() -> String {
    DEFAULT_PEER_SERV_HOST.to_owned()
}

fn default_message_box() -> String {
    DEFAULT_MESSAGE_BOX.to_owned()
}

fn default_protocol_name() -> String {
    DEFAULT_PROTOCOL_NAME.to_owned()
}

fn default_satoshi_threshold() -> u64 {
    DEFAULT_SATOSHI_THRESHOLD
}

fn default_invoice_number() -> String {
    DEFAULT_INVOICE_NUMBER.to_owned()
}

fn default_anyone_secret_hex() -> String {
    DEFAULT_ANYONE_SECRET_HEX.to_owned()
}

fn default_max_concurrent_checks() -> usize {
    DEFAULT_MAX_CONCURRENT_CHECKS
}

fn default_oracle_timeout_ms() -> u64 {
    DEFAULT_ORACLE_TIMEOUT_MS
}
