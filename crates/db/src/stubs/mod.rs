//! In-memory database implementations.

mod mem;

pub use mem::MemListingDb;
