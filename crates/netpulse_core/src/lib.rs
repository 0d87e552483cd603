//! Core domain logic for netpulse.
//! This crate is the single source of truth for catalog and reading invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod modem;
pub mod render;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::operator::{default_seed, OperatorRecord};
pub use model::reading::{
    NetworkReading, NetworkType, ReadingDraft, ReadingValidationError, SIGNAL_CEIL_DBM,
    SIGNAL_FLOOR_DBM,
};
pub use render::{RecordContainer, RenderedRecord, TextContainer};
pub use repo::slot_store::{MemorySlotStore, SlotError, SlotResult, SlotStore, SqliteSlotStore};
pub use service::catalog::{CatalogError, CatalogResult, OperatorCatalog, DATA_SLOT_KEY};
pub use service::readings::{ReadingError, ReadingLog, ReadingResult, READINGS_SLOT_KEY};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
