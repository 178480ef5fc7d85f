//! Text input parsers.
//!
//! # Responsibility
//! - Convert user-typed text into core value types.
//!
//! # Invariants
//! - Malformed text is an expected input; parsers report it as `None`.

pub mod date_text;
