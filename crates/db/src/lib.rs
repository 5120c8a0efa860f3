//! Storage interface for tracked marketplace listings.
//!
//! The overlay only needs ordinary keyed CRUD; this crate defines the trait
//! boundary the indexer works against plus an in-memory implementation used
//! in tests and small deployments.

mod errors;
pub mod stubs;
mod traits;
mod types;

pub use errors::{DbError, DbResult};
pub use traits::ListingDatabase;
pub use types::ListingEntry;
