//! Containers with divergent admission policies for in-memory item stowage.
//!
//! Every container variant implements the [`Container`](entities::Container)
//! trait: items are offered one at a time or in batches, the variant's
//! admission policy decides whether they are stored, and membership is
//! answered by value.

/// Entities to model items, containers and stowage manifests
pub mod entities;

/// Error kinds raised by the admission path
pub mod errors;

/// Importing external manifests into this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
