//! Trait definitions for the listing store.

use bazaar_primitives::OutputRef;

use crate::{types::ListingEntry, DbResult};

/// Listing store interface. Operations are NOT validated at this level;
/// admission decides what gets stored, this only persists and serves it.
pub trait ListingDatabase: Send + Sync + 'static {
    /// Stores a listing record, replacing any previous record for the same
    /// outpoint. A UTXO admitted twice carries identical data, so replace
    /// semantics keep the indexer idempotent.
    fn put_listing(&self, entry: ListingEntry) -> DbResult<()>;

    /// Deletes the record for an outpoint, returning whether it existed.
    fn del_listing(&self, output: &OutputRef) -> DbResult<bool>;

    /// Gets the full record for an outpoint, if tracked.
    fn get_listing(&self, output: &OutputRef) -> DbResult<Option<ListingEntry>>;

    /// Finds the outpoint itself, if tracked. Returns zero or one entries.
    fn find_by_outpoint(&self, output: &OutputRef) -> DbResult<Vec<OutputRef>>;

    /// Finds all outpoints listed by a seller identity key.
    fn find_by_seller(&self, seller: &str) -> DbResult<Vec<OutputRef>>;

    /// Finds all outpoints offering a given asset.
    fn find_by_asset_id(&self, asset_id: &str) -> DbResult<Vec<OutputRef>>;

    /// Full scan of tracked outpoints.
    fn find_all(&self) -> DbResult<Vec<OutputRef>>;
}
