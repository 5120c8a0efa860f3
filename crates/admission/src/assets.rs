//! Desired-asset list validation.

use thiserror::Error;

use crate::oracle::OwnershipVerifier;

/// Structural violations in a desired-assets map.
#[derive(Debug, Clone, Error)]
pub enum AssetListViolation {
    /// The field is not valid JSON.
    #[error("not valid json: {0}")]
    MalformedJson(String),

    /// The JSON value is not an object.
    #[error("not a json object")]
    NotAnObject,

    /// A key fails the asset identifier grammar.
    #[error("invalid asset id {0:?}")]
    InvalidAssetId(String),

    /// A value is not an integer >= -1 (-1 means "any amount").
    #[error("invalid amount {value} for asset {asset_id:?}")]
    InvalidAmount {
        asset_id: String,
        value: serde_json::Value,
    },
}

/// Validates the desired-assets map from token field 1.
///
/// Keys must pass the oracle's asset-id grammar; values must be integers
/// >= -1. The empty map is valid: a seller accepting nothing in return is
/// degenerate but not malformed.
pub(crate) fn validate_desired_assets(
    raw: &[u8],
    oracle: &impl OwnershipVerifier,
) -> Result<(), AssetListViolation> {
    let value: serde_json::Value = serde_json::from_slice(raw)
        .map_err(|e| AssetListViolation::MalformedJson(e.to_string()))?;
    let map = value.as_object().ok_or(AssetListViolation::NotAnObject)?;

    for (asset_id, amount) in map {
        if !oracle.validate_asset_id(asset_id) {
            return Err(AssetListViolation::InvalidAssetId(asset_id.clone()));
        }
        match amount.as_i64() {
            Some(n) if n >= -1 => {}
            _ => {
                return Err(AssetListViolation::InvalidAmount {
                    asset_id: asset_id.clone(),
                    value: amount.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::{validate_desired_assets, AssetListViolation};
    use crate::oracle::MockOwnershipVerifier;

    fn oracle_accepting_ids() -> MockOwnershipVerifier {
        let mut oracle = MockOwnershipVerifier::new();
        oracle.expect_validate_asset_id().return_const(true);
        oracle
    }

    #[test]
    fn test_empty_map_is_valid() {
        let oracle = oracle_accepting_ids();
        assert!(validate_desired_assets(b"{}", &oracle).is_ok());
    }

    #[test]
    fn test_amount_range() {
        let oracle = oracle_accepting_ids();
        assert!(validate_desired_assets(br#"{"assetA": 0}"#, &oracle).is_ok());
        assert!(validate_desired_assets(br#"{"assetA": 5}"#, &oracle).is_ok());
        // -1 is the "any amount" sentinel.
        assert!(validate_desired_assets(br#"{"assetA": -1}"#, &oracle).is_ok());

        assert!(matches!(
            validate_desired_assets(br#"{"assetA": -2}"#, &oracle),
            Err(AssetListViolation::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_non_integer_amounts_rejected() {
        let oracle = oracle_accepting_ids();
        for raw in [
            br#"{"assetA": 1.5}"#.as_slice(),
            br#"{"assetA": "5"}"#.as_slice(),
            br#"{"assetA": null}"#.as_slice(),
            br#"{"assetA": 18446744073709551615}"#.as_slice(),
        ] {
            assert!(matches!(
                validate_desired_assets(raw, &oracle),
                Err(AssetListViolation::InvalidAmount { .. })
            ));
        }
    }

    #[test]
    fn test_bad_asset_id_named() {
        let mut oracle = MockOwnershipVerifier::new();
        oracle
            .expect_validate_asset_id()
            .returning(|id| id != "bogus");

        let err = validate_desired_assets(br#"{"bogus": 1}"#, &oracle).unwrap_err();
        assert!(matches!(err, AssetListViolation::InvalidAssetId(id) if id == "bogus"));
    }

    #[test]
    fn test_non_object_rejected() {
        let oracle = oracle_accepting_ids();
        assert!(matches!(
            validate_desired_assets(br#"[1, 2]"#, &oracle),
            Err(AssetListViolation::NotAnObject)
        ));
        assert!(matches!(
            validate_desired_assets(b"not json", &oracle),
            Err(AssetListViolation::MalformedJson(_))
        ));
    }
}
