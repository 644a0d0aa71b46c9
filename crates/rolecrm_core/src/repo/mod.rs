//! Persisted collection layer shared by every domain store.
//!
//! # Responsibility
//! - Hold one ordered, keyed collection per storage key.
//! - Snapshot the full collection as JSON after every mutation.
//!
//! # Invariants
//! - In-memory state and the persisted snapshot never diverge: a mutation is
//!   swapped in only after its snapshot was written.
//! - Ids are unique within a collection.

pub mod collection;

pub use collection::{Collection, Record, RepoError, RepoResult};
