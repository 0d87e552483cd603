//! Storage capability layer.
//!
//! # Responsibility
//! - Define the slot-store contract services depend on.
//! - Isolate SQLite details from catalog/reading orchestration.
//!
//! # Invariants
//! - Slot absence is distinct from a stored empty string.
//! - Implementations return semantic errors instead of masking storage failure.

pub mod slot_store;
