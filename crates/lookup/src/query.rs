//! Lookup query grammar.

use std::str::FromStr;

use bitcoin::Txid;
use serde_json::Value;

use crate::errors::LookupError;
use bazaar_primitives::OutputRef;

/// A validated lookup query: exactly one of the recognized parameter
/// combinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupQuery {
    /// `{txid, vout}` — a single outpoint.
    Outpoint(OutputRef),
    /// `{findAll: "true"}` — full scan.
    All,
    /// `{seller}` — every listing by a seller identity key.
    Seller(String),
    /// `{assetId}` — every listing offering an asset.
    AssetId(String),
}

impl LookupQuery {
    /// Parses and validates a raw JSON query object.
    ///
    /// The grammar is strict: zero recognized combinations is
    /// [`LookupError::MissingQuery`], more than one is
    /// [`LookupError::AmbiguousQuery`]. The original overlay's first-match
    /// behavior silently ignored extra parameters, which masked caller
    /// bugs.
    pub fn from_value(value: &Value) -> Result<Self, LookupError> {
        let obj = value.as_object().ok_or(LookupError::MissingQuery)?;

        let has_txid = obj.contains_key("txid");
        let has_vout = obj.contains_key("vout");
        if has_txid != has_vout {
            return Err(LookupError::PartialOutpoint);
        }

        let mut candidates = Vec::new();

        if has_txid && has_vout {
            let txid_str = obj["txid"]
                .as_str()
                .ok_or(LookupError::InvalidParameter("txid"))?;
            let txid =
                Txid::from_str(txid_str).map_err(|_| LookupError::InvalidParameter("txid"))?;
            let vout = obj["vout"]
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .ok_or(LookupError::InvalidParameter("vout"))?;
            candidates.push(LookupQuery::Outpoint(OutputRef::new(txid, vout)));
        }

        if let Some(v) = obj.get("findAll") {
            if v.as_str() != Some("true") {
                return Err(LookupError::InvalidParameter("findAll"));
            }
            candidates.push(LookupQuery::All);
        }

        if let Some(v) = obj.get("seller") {
            let seller = v.as_str().ok_or(LookupError::InvalidParameter("seller"))?;
            candidates.push(LookupQuery::Seller(seller.to_owned()));
        }

        if let Some(v) = obj.get("assetId") {
            let asset_id = v.as_str().ok_or(LookupError::InvalidParameter("assetId"))?;
            candidates.push(LookupQuery::AssetId(asset_id.to_owned()));
        }

        match candidates.len() {
            0 => Err(LookupError::MissingQuery),
            1 => Ok(candidates.remove(0)),
            _ => Err(LookupError::AmbiguousQuery),
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::LookupQuery;
    use crate::errors::LookupError;

    const TXID: &str = "deadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef";

    #[test]
    fn test_outpoint_query() {
        let q = LookupQuery::from_value(&json!({"txid": TXID, "vout": 1})).expect("parse");
        match q {
            LookupQuery::Outpoint(op) => assert_eq!(op.vout(), 1),
            other => panic!("wrong query: {other:?}"),
        }
    }

    #[test]
    fn test_find_all_query() {
        let q = LookupQuery::from_value(&json!({"findAll": "true"})).expect("parse");
        assert_eq!(q, LookupQuery::All);

        assert!(matches!(
            LookupQuery::from_value(&json!({"findAll": "yes"})),
            Err(LookupError::InvalidParameter("findAll"))
        ));
    }

    #[test]
    fn test_seller_and_asset_queries() {
        assert_eq!(
            LookupQuery::from_value(&json!({"seller": "02ab"})).expect("parse"),
            LookupQuery::Seller("02ab".to_owned())
        );
        assert_eq!(
            LookupQuery::from_value(&json!({"assetId": "assetA"})).expect("parse"),
            LookupQuery::AssetId("assetA".to_owned())
        );
    }

    #[test]
    fn test_missing_query() {
        assert!(matches!(
            LookupQuery::from_value(&json!({})),
            Err(LookupError::MissingQuery)
        ));
        assert!(matches!(
            LookupQuery::from_value(&json!({"unknown": 1})),
            Err(LookupError::MissingQuery)
        ));
        assert!(matches!(
            LookupQuery::from_value(&json!(null)),
            Err(LookupError::MissingQuery)
        ));
    }

    #[test]
    fn test_ambiguous_query() {
        assert!(matches!(
            LookupQuery::from_value(&json!({"seller": "02ab", "assetId": "assetA"})),
            Err(LookupError::AmbiguousQuery)
        ));
        assert!(matches!(
            LookupQuery::from_value(&json!({"txid": TXID, "vout": 0, "findAll": "true"})),
            Err(LookupError::AmbiguousQuery)
        ));
    }

    #[test]
    fn test_partial_outpoint() {
        assert!(matches!(
            LookupQuery::from_value(&json!({"txid": TXID})),
            Err(LookupError::PartialOutpoint)
        ));
        assert!(matches!(
            LookupQuery::from_value(&json!({"vout": 0})),
            Err(LookupError::PartialOutpoint)
        ));
    }

    #[test]
    fn test_bad_txid_rejected() {
        assert!(matches!(
            LookupQuery::from_value(&json!({"txid": "nope", "vout": 0})),
            Err(LookupError::InvalidParameter("txid"))
        ));
    }
}
