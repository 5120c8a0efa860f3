//! Lookup side of the marketplace overlay.
//!
//! Tracks admitted listing outputs in a [`bazaar_db::ListingDatabase`] and
//! serves queries over them. Admission has already vetted the tokens by the
//! time they arrive here; this layer only extracts and persists fields.

mod errors;
mod indexer;
mod query;

pub use errors::{IndexError, LookupError};
pub use indexer::ListingIndexer;
pub use query::LookupQuery;
