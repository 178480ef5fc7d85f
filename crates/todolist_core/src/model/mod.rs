//! Domain value types and aggregates.
//!
//! # Responsibility
//! - Define the `Date` value type and the `Event` aggregate built on it.
//!
//! # Invariants
//! - A `Date` is valid for its whole lifetime.
//! - An `Event` never holds a begin date after its end date.

pub mod date;
pub mod event;
