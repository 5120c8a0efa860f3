//! Listing index maintenance and query serving.

use std::sync::Arc;

use bitcoin::{Script, Txid};
use serde_json::Value;
use tracing::*;

use bazaar_db::{ListingDatabase, ListingEntry};
use bazaar_primitives::OutputRef;
use bazaar_token::{decode_token, TokenDecodeError};

use crate::{
    errors::{IndexError, LookupError},
    query::LookupQuery,
};

/// Maintains the listing store from output add/spend events and serves
/// lookup queries against it.
///
/// Events are tagged with the overlay topic they arrived under; events for
/// topics the indexer was not configured to track are ignored.
pub struct ListingIndexer<D> {
    db: Arc<D>,
    topics: Vec<String>,
}

impl<D> core::fmt::Debug for ListingIndexer<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListingIndexer")
            .field("topics", &self.topics)
            .finish_non_exhaustive()
    }
}

impl<D: ListingDatabase> ListingIndexer<D> {
    pub fn new(db: Arc<D>, topics: Vec<String>) -> Self {
        Self { db, topics }
    }

    fn tracks(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t == topic)
    }

    /// Ingests a newly admitted listing output.
    ///
    /// The script is re-decoded here rather than threaded through from
    /// admission, so the indexer can be driven by replayed events alone.
    pub fn output_added(
        &self,
        txid: Txid,
        vout: u32,
        script: &Script,
        topic: &str,
    ) -> Result<(), IndexError> {
        if !self.tracks(topic) {
            trace!(%topic, "ignoring output for untracked topic");
            return Ok(());
        }

        let token = decode_token(script)?;
        let proof = token.ownership_proof()?;

        let proof_text = core::str::from_utf8(&token.fields()[0])
            .map_err(|_| TokenDecodeError::FieldNotUtf8(0))?
            .to_owned();
        let assets_text = core::str::from_utf8(token.desired_assets_bytes())
            .map_err(|_| TokenDecodeError::FieldNotUtf8(1))?
            .to_owned();

        let output = OutputRef::new(txid, vout);
        let entry = ListingEntry {
            output,
            seller: proof.prover.clone(),
            asset_id: proof.asset_id.clone(),
            amount: proof.amount,
            proof: proof_text,
            accepted_assets: assets_text,
            description: token.description().map(str::to_owned),
        };

        debug!(%output, asset_id = %entry.asset_id, "indexing listing");
        self.db.put_listing(entry)?;
        Ok(())
    }

    /// Removes a listing whose UTXO was spent. Returns whether a record was
    /// actually deleted.
    pub fn output_spent(&self, txid: Txid, vout: u32, topic: &str) -> Result<bool, IndexError> {
        if !self.tracks(topic) {
            return Ok(false);
        }

        let output = OutputRef::new(txid, vout);
        let deleted = self.db.del_listing(&output)?;
        if deleted {
            debug!(%output, "dropped spent listing");
        }
        Ok(deleted)
    }

    /// Answers a raw JSON lookup query with the matching outpoints.
    pub fn lookup(&self, raw_query: &Value) -> Result<Vec<OutputRef>, LookupError> {
        let query = LookupQuery::from_value(raw_query)?;
        let found = match query {
            LookupQuery::Outpoint(op) => self.db.find_by_outpoint(&op)?,
            LookupQuery::All => self.db.find_all()?,
            LookupQuery::Seller(seller) => self.db.find_by_seller(&seller)?,
            LookupQuery::AssetId(asset_id) => self.db.find_by_asset_id(&asset_id)?,
        };
        Ok(found)
    }
}

#[cfg(test)]
mod test {
    use std::{str::FromStr, sync::Arc};

    use bitcoin::Txid;
    use serde_json::json;

    use super::ListingIndexer;
    use crate::errors::{IndexError, LookupError};
    use bazaar_db::{stubs::MemListingDb, ListingDatabase};
    use bazaar_primitives::{pubkey_hex, OutputRef};
    use bazaar_test_utils::{anyone_keypair, build_listing_token, listing_proof_json, seller_keypair};

    const TOPIC: &str = "tm_marketplace";
    const INVOICE: &str = "2-marketplace-1";

    fn txid(byte: u8) -> Txid {
        Txid::from_str(&format!("{:02x}", byte).repeat(32)).expect("valid txid")
    }

    fn indexer() -> ListingIndexer<MemListingDb> {
        ListingIndexer::new(Arc::new(MemListingDb::new()), vec![TOPIC.to_owned()])
    }

    fn add_listing(idx: &ListingIndexer<MemListingDb>, seed: u8, asset_id: &str, vout: u32) {
        let (_, seller_pk) = seller_keypair(seed);
        let (anyone_sk, anyone_pk) = anyone_keypair();
        let proof = listing_proof_json(&seller_pk, &anyone_pk, asset_id, 3);
        let script = build_listing_token(
            &seller_pk,
            &anyone_sk,
            INVOICE,
            proof.as_bytes(),
            br#"{"assetB":1}"#,
            Some("fixture listing"),
        );
        idx.output_added(txid(seed), vout, &script, TOPIC)
            .expect("index");
    }

    #[test]
    fn test_added_listing_found_by_outpoint() {
        let idx = indexer();
        add_listing(&idx, 0x31, "assetA", 2);

        let found = idx
            .lookup(&json!({"txid": txid(0x31).to_string(), "vout": 2}))
            .expect("lookup");
        assert_eq!(found, vec![OutputRef::new(txid(0x31), 2)]);
    }

    #[test]
    fn test_stored_entry_fields() {
        let idx = indexer();
        add_listing(&idx, 0x32, "assetA", 0);

        let (_, seller_pk) = seller_keypair(0x32);
        let entry = idx
            .db
            .get_listing(&OutputRef::new(txid(0x32), 0))
            .expect("get")
            .expect("entry present");
        assert_eq!(entry.seller, pubkey_hex(&seller_pk));
        assert_eq!(entry.asset_id, "assetA");
        assert_eq!(entry.amount, 3);
        assert_eq!(entry.accepted_assets, r#"{"assetB":1}"#);
        assert_eq!(entry.description.as_deref(), Some("fixture listing"));
    }

    #[test]
    fn test_seller_asset_and_all_queries() {
        let idx = indexer();
        add_listing(&idx, 0x41, "assetA", 0);
        add_listing(&idx, 0x42, "assetA", 1);
        add_listing(&idx, 0x43, "assetC", 0);

        let (_, seller_pk) = seller_keypair(0x41);
        let by_seller = idx
            .lookup(&json!({"seller": pubkey_hex(&seller_pk)}))
            .expect("lookup");
        assert_eq!(by_seller, vec![OutputRef::new(txid(0x41), 0)]);

        let by_asset = idx.lookup(&json!({"assetId": "assetA"})).expect("lookup");
        assert_eq!(by_asset.len(), 2);

        let all = idx.lookup(&json!({"findAll": "true"})).expect("lookup");
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_spend_removes_listing() {
        let idx = indexer();
        add_listing(&idx, 0x51, "assetA", 0);

        assert!(idx.output_spent(txid(0x51), 0, TOPIC).expect("spend"));
        assert!(!idx.output_spent(txid(0x51), 0, TOPIC).expect("respend"));

        let found = idx.lookup(&json!({"findAll": "true"})).expect("lookup");
        assert!(found.is_empty());
    }

    #[test]
    fn test_untracked_topic_ignored() {
        let idx = indexer();
        let (_, seller_pk) = seller_keypair(0x61);
        let (anyone_sk, anyone_pk) = anyone_keypair();
        let proof = listing_proof_json(&seller_pk, &anyone_pk, "assetA", 1);
        let script = build_listing_token(
            &seller_pk,
            &anyone_sk,
            INVOICE,
            proof.as_bytes(),
            br#"{}"#,
            None,
        );

        idx.output_added(txid(0x61), 0, &script, "tm_other")
            .expect("ignored");
        let found = idx.lookup(&json!({"findAll": "true"})).expect("lookup");
        assert!(found.is_empty());
    }

    #[test]
    fn test_non_token_script_is_decode_error() {
        let idx = indexer();
        let script = bitcoin::ScriptBuf::new();
        assert!(matches!(
            idx.output_added(txid(0x71), 0, &script, TOPIC),
            Err(IndexError::Decode(_))
        ));
    }

    #[test]
    fn test_bad_query_surfaces_error() {
        let idx = indexer();
        assert!(matches!(
            idx.lookup(&json!({})),
            Err(LookupError::MissingQuery)
        ));
    }
}
