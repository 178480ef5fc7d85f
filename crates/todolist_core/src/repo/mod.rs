//! Event repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Define the storage seam the agenda service depends on.
//! - Keep ordering and identity semantics independent of any file format.
//!
//! # Invariants
//! - Repositories preserve insertion order.
//! - Lookups, updates and removals target `EventId`, never structural equality.

pub mod event_repo;
