//! In-memory listing store.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use bazaar_primitives::OutputRef;

use crate::{traits::ListingDatabase, types::ListingEntry, DbResult};

/// Map-backed [`ListingDatabase`]. Secondary lookups are linear scans,
/// which is fine at the scale a single topic tracks.
#[derive(Debug, Default)]
pub struct MemListingDb {
    listings: RwLock<BTreeMap<OutputRef, ListingEntry>>,
}

impl MemListingDb {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListingDatabase for MemListingDb {
    fn put_listing(&self, entry: ListingEntry) -> DbResult<()> {
        self.listings.write().insert(entry.output, entry);
        Ok(())
    }

    fn del_listing(&self, output: &OutputRef) -> DbResult<bool> {
        Ok(self.listings.write().remove(output).is_some())
    }

    fn get_listing(&self, output: &OutputRef) -> DbResult<Option<ListingEntry>> {
        Ok(self.listings.read().get(output).cloned())
    }

    fn find_by_outpoint(&self, output: &OutputRef) -> DbResult<Vec<OutputRef>> {
        Ok(self.listings.read().get(output).map(|e| e.output).into_iter().collect())
    }

    fn find_by_seller(&self, seller: &str) -> DbResult<Vec<OutputRef>> {
        Ok(self
            .listings
            .read()
            .values()
            .filter(|e| e.seller == seller)
            .map(|e| e.output)
            .collect())
    }

    fn find_by_asset_id(&self, asset_id: &str) -> DbResult<Vec<OutputRef>> {
        Ok(self
            .listings
            .read()
            .values()
            .filter(|e| e.asset_id == asset_id)
            .map(|e| e.output)
            .collect())
    }

    fn find_all(&self) -> DbResult<Vec<OutputRef>> {
        Ok(self.listings.read().keys().copied().collect())
    }
}
