//! Admission validation for marketplace listing tokens.
//!
//! Decides, per transaction output, whether the output carries a valid
//! listing token and belongs in the topic's tracked UTXO set. Checks run
//! independently per output and fail closed: a bad output rejects only
//! itself, and a fault in the orchestration itself yields an empty
//! admission set rather than an error.

#[cfg(test)]
#[allow(unused_imports)]
use bazaar_common as _;

mod assets;
mod config;
mod docs;
mod oracle;
mod pipeline;
mod reject;

pub use assets::AssetListViolation;
pub use config::{AdmissionConfig, OracleConfig};
pub use docs::protocol_documentation;
pub use oracle::{OracleError, OwnershipVerifier};
pub use pipeline::{AdmissionPipeline, AdmissionResult};
pub use reject::RejectionReason;
