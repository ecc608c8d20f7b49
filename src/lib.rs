//! Lanai Set Library
//!
//! Fixed-capacity set abstract data types backed by an open-addressed hash
//! table with linear probing and tombstones.
//!
//! # Architecture
//!
//! The crate is designed with the following principles in mind:
//! - One probing core shared by every set flavour
//! - Ownership policy expressed in the type, not in runtime flags
//! - Hashing and equality injected as strategies
//! - No resizing: capacity is part of the contract
//! - Structured `tracing` events instead of printing

// Re-export public modules
pub mod data_structures;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
