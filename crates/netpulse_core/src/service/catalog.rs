//! Operator catalog use-case service.
//!
//! # Responsibility
//! - Seed, then serve, a durable ordered list of operator records.
//! - Render the catalog into an injected presentation container.
//!
//! # Invariants
//! - The `"data"` slot is written at most once, and only when absent; any
//!   pre-existing value (empty string included) is never overwritten.
//! - Read order preserves the serialization order of the stored payload.
//! - A malformed stored payload is surfaced as an error, never masked as
//!   empty data.

use crate::model::operator::{default_seed, OperatorRecord};
use crate::render::{RecordContainer, RenderedRecord};
use crate::repo::slot_store::{SlotError, SlotStore};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed slot key holding the serialized catalog.
pub const DATA_SLOT_KEY: &str = "data";

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog persistence and payload errors.
#[derive(Debug)]
pub enum CatalogError {
    /// Slot unreadable or unwritable.
    Storage(SlotError),
    /// Seed sequence could not be serialized.
    SeedEncode(serde_json::Error),
    /// Stored payload is not a valid serialized record list.
    Format {
        slot: &'static str,
        source: serde_json::Error,
    },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::SeedEncode(err) => write!(f, "failed to encode seed payload: {err}"),
            Self::Format { slot, source } => {
                write!(f, "invalid payload in slot `{slot}`: {source}")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::SeedEncode(err) => Some(err),
            Self::Format { source, .. } => Some(source),
        }
    }
}

impl From<SlotError> for CatalogError {
    fn from(value: SlotError) -> Self {
        Self::Storage(value)
    }
}

/// Durable ordered operator catalog over an injected slot store.
pub struct OperatorCatalog<S: SlotStore> {
    slots: S,
    seed: Vec<OperatorRecord>,
}

impl<S: SlotStore> OperatorCatalog<S> {
    /// Creates a catalog with the default operator seed.
    pub fn new(slots: S) -> Self {
        Self::with_seed(slots, default_seed())
    }

    /// Creates a catalog with a caller-provided seed sequence.
    pub fn with_seed(slots: S, seed: Vec<OperatorRecord>) -> Self {
        Self { slots, seed }
    }

    pub fn seed(&self) -> &[OperatorRecord] {
        &self.seed
    }

    /// Writes the seed if and only if the slot is absent.
    ///
    /// Returns whether seeding occurred. The presence check and the write are
    /// not atomic across connections; a single logical writer is assumed.
    pub fn initialize(&self) -> CatalogResult<bool> {
        if self.slots.get(DATA_SLOT_KEY)?.is_some() {
            info!("event=catalog_seed module=catalog status=skip reason=slot_present");
            return Ok(false);
        }

        let payload = serde_json::to_string(&self.seed).map_err(CatalogError::SeedEncode)?;
        self.slots.set(DATA_SLOT_KEY, &payload)?;
        info!(
            "event=catalog_seed module=catalog status=ok records={}",
            self.seed.len()
        );
        Ok(true)
    }

    /// Reads all records in stored order.
    ///
    /// An absent slot or a stored empty string reads as no data.
    pub fn records(&self) -> CatalogResult<Vec<OperatorRecord>> {
        let payload = match self.slots.get(DATA_SLOT_KEY)? {
            Some(value) if !value.is_empty() => value,
            _ => return Ok(Vec::new()),
        };

        serde_json::from_str(&payload).map_err(|source| CatalogError::Format {
            slot: DATA_SLOT_KEY,
            source,
        })
    }

    /// Clears the container, then appends one item per stored record.
    ///
    /// The container is cleared before the slot is read, so an absent or
    /// empty slot still leaves it with zero items. Returns the number of
    /// items appended.
    pub fn render_into(&self, container: &mut dyn RecordContainer) -> CatalogResult<usize> {
        container.clear();

        let records = self.records()?;
        for record in &records {
            container.append(RenderedRecord {
                id: record.id.clone(),
                network_operator: record.network_operator.clone(),
            });
        }

        info!(
            "event=catalog_render module=catalog status=ok items={}",
            records.len()
        );
        Ok(records.len())
    }
}
