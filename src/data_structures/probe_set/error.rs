// Copyright (c) 2025 Lanai Set Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the probe sets.

/// Errors that can occur while constructing a probe set.
///
/// Element operations (`add`, `remove`, `find`) never fail; a full set or a
/// duplicate insert is a silent no-op.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum ProbeSetError {
    /// A set must have room for at least one element
    #[error("Probe set capacity must be greater than 0")]
    ZeroCapacity,

    /// The slot array could not be reserved
    #[error("Failed to allocate {capacity} slots for probe set")]
    AllocationFailed {
        /// The requested number of slots.
        capacity: usize,
    },
}

/// Result type for probe set construction
pub type Result<T> = std::result::Result<T, ProbeSetError>;
