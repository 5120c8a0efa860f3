//! Cross-cutting utilities shared by the overlay crates.

pub mod logging;
