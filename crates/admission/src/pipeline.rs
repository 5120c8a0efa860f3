//! Per-output admission orchestration.

use std::{sync::Arc, time::Duration};

use futures::{stream, StreamExt};
use secp256k1::{PublicKey, SecretKey};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    assets::validate_desired_assets,
    config::AdmissionConfig,
    oracle::{OracleError, OwnershipVerifier},
    reject::RejectionReason,
};
use bazaar_crypto::{derive_child_pubkey, keypair_from_secret_hex};
use bazaar_primitives::{ParseError, TxOutput};
use bazaar_token::decode_token;

/// The pipeline's verdict for one transaction.
///
/// Admitted indices are a sorted, duplicate-free subset of the input output
/// indices. `outputs_to_retain` is reserved by the overlay protocol and
/// always empty here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionResult {
    pub outputs_to_admit: Vec<u32>,
    pub outputs_to_retain: Vec<u32>,
}

impl AdmissionResult {
    /// The fail-closed result: nothing admitted.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Runs the admission checks over a transaction's outputs.
///
/// Outputs are checked independently with bounded concurrency; the only
/// suspending operation is the oracle round trip. All key material and
/// protocol constants come from [`AdmissionConfig`].
pub struct AdmissionPipeline<O> {
    oracle: Arc<O>,
    anyone_sk: SecretKey,
    anyone_pk: PublicKey,
    invoice_number: String,
    max_in_flight: usize,
    oracle_timeout: Duration,
}

impl<O> Clone for AdmissionPipeline<O> {
    fn clone(&self) -> Self {
        Self {
            oracle: self.oracle.clone(),
            anyone_sk: self.anyone_sk,
            anyone_pk: self.anyone_pk,
            invoice_number: self.invoice_number.clone(),
            max_in_flight: self.max_in_flight,
            oracle_timeout: self.oracle_timeout,
        }
    }
}

impl<O> core::fmt::Debug for AdmissionPipeline<O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AdmissionPipeline")
            .field("invoice_number", &self.invoice_number)
            .field("max_in_flight", &self.max_in_flight)
            .finish_non_exhaustive()
    }
}

impl<O: OwnershipVerifier + 'static> AdmissionPipeline<O> {
    /// Builds a pipeline from config, parsing the configured "anyone" key.
    pub fn from_config(config: &AdmissionConfig, oracle: Arc<O>) -> Result<Self, ParseError> {
        let (anyone_sk, anyone_pk) = keypair_from_secret_hex(&config.anyone_secret_hex)?;
        Ok(Self {
            oracle,
            anyone_sk,
            anyone_pk,
            invoice_number: config.invoice_number.clone(),
            max_in_flight: config.max_concurrent_checks.max(1),
            oracle_timeout: Duration::from_millis(config.oracle_timeout_ms),
        })
    }

    /// Decides which of a transaction's outputs enter the tracked set.
    ///
    /// Never returns an error: per-output failures exclude that output, and
    /// a fault in the evaluation task itself (a panic in the oracle or
    /// decoder) fails closed to an empty result so callers always get a
    /// well-formed verdict.
    pub async fn identify_admissible_outputs(&self, outputs: Vec<TxOutput>) -> AdmissionResult {
        let pipeline = self.clone();
        let task = tokio::spawn(async move { pipeline.evaluate_outputs(outputs).await });
        match task.await {
            Ok(result) => result,
            Err(e) => {
                warn!(err = %e, "admission evaluation fault, failing closed");
                AdmissionResult::empty()
            }
        }
    }

    async fn evaluate_outputs(&self, outputs: Vec<TxOutput>) -> AdmissionResult {
        let verdicts: Vec<(u32, Result<(), RejectionReason>)> = stream::iter(outputs)
            .map(|output| async move { (output.index(), self.check_output(&output).await) })
            .buffer_unordered(self.max_in_flight)
            .collect()
            .await;

        let mut outputs_to_admit = Vec::new();
        for (index, verdict) in verdicts {
            match verdict {
                Ok(()) => outputs_to_admit.push(index),
                Err(reason) => {
                    debug!(%index, %reason, "rejecting output");
                }
            }
        }
        outputs_to_admit.sort_unstable();
        outputs_to_admit.dedup();

        AdmissionResult {
            outputs_to_admit,
            outputs_to_retain: Vec::new(),
        }
    }

    /// Runs the full check sequence for one output. Every failure mode maps
    /// to a [`RejectionReason`]; nothing here aborts sibling outputs.
    async fn check_output(&self, output: &TxOutput) -> Result<(), RejectionReason> {
        let token = decode_token(output.script())?;
        let proof = token.ownership_proof()?;

        // The locking key must be the invoice-derived child of the claimed
        // prover identity, otherwise anyone could relist under a stolen
        // identity key.
        let prover = proof.prover_key()?;
        let expected = derive_child_pubkey(&self.anyone_sk, &prover, &self.invoice_number)?;
        if &expected != token.locking_pubkey() {
            return Err(RejectionReason::KeyMismatch);
        }

        // Listings must be verifiable by any party, not a chosen counterpart.
        if proof.verifier_key()? != self.anyone_pk {
            return Err(RejectionReason::ProofNotForAnyone);
        }

        let verdict = tokio::time::timeout(
            self.oracle_timeout,
            self.oracle.verify_ownership(&proof),
        )
        .await
        .map_err(|_| OracleError::TimedOut)??;
        if !verdict {
            return Err(RejectionReason::InvalidProof);
        }

        validate_desired_assets(token.desired_assets_bytes(), self.oracle.as_ref())?;

        Ok(())
    }
}
