//! Operator catalog record.
//!
//! # Responsibility
//! - Define the persisted shape of one mobile network operator entry.
//! - Provide the default seed sequence used on first run.
//!
//! # Invariants
//! - `id` values are unique within a seeded set and stable once written.
//! - The serialized field set is exactly `{id, network_operator}`.

use serde::{Deserialize, Serialize};

/// One mobile network operator entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorRecord {
    /// Decimal-string identifier, assigned sequentially in the seed ("1", "2", ...).
    pub id: String,
    /// Operator display name, e.g. "GLO" or "MTN".
    pub network_operator: String,
}

impl OperatorRecord {
    pub fn new(id: impl Into<String>, network_operator: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            network_operator: network_operator.into(),
        }
    }
}

/// Default seed written when the catalog slot is absent.
///
/// Callers that need a different operator set pass their own sequence to
/// `OperatorCatalog::with_seed`; this list is configuration, not a fixed rule.
pub fn default_seed() -> Vec<OperatorRecord> {
    vec![
        OperatorRecord::new("1", "GLO"),
        OperatorRecord::new("2", "MTN"),
        OperatorRecord::new("3", "AIRTEL"),
        OperatorRecord::new("4", "9MOBILE"),
    ]
}
