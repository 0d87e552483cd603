//! Reading log use-case service.
//!
//! # Responsibility
//! - Maintain an append-only log of network readings in the `"readings"` slot.
//! - Serve latest-sample and time-window queries over the log.
//!
//! # Invariants
//! - Reading ids are sequential and 1-based in append order.
//! - Drafts are validated before any write.
//! - A malformed stored payload is surfaced as an error, never masked as an
//!   empty log.

use crate::model::reading::{NetworkReading, ReadingDraft, ReadingValidationError};
use crate::repo::slot_store::{SlotError, SlotStore};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed slot key holding the serialized reading log.
pub const READINGS_SLOT_KEY: &str = "readings";

pub type ReadingResult<T> = Result<T, ReadingError>;

/// Reading log persistence and payload errors.
#[derive(Debug)]
pub enum ReadingError {
    Storage(SlotError),
    Validation(ReadingValidationError),
    Encode(serde_json::Error),
    Format {
        slot: &'static str,
        source: serde_json::Error,
    },
}

impl Display for ReadingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode reading log: {err}"),
            Self::Format { slot, source } => {
                write!(f, "invalid payload in slot `{slot}`: {source}")
            }
        }
    }
}

impl Error for ReadingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Format { source, .. } => Some(source),
        }
    }
}

impl From<SlotError> for ReadingError {
    fn from(value: SlotError) -> Self {
        Self::Storage(value)
    }
}

impl From<ReadingValidationError> for ReadingError {
    fn from(value: ReadingValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Append-only reading log over an injected slot store.
pub struct ReadingLog<S: SlotStore> {
    slots: S,
}

impl<S: SlotStore> ReadingLog<S> {
    pub fn new(slots: S) -> Self {
        Self { slots }
    }

    /// Seeds an empty log if and only if the slot is absent.
    ///
    /// Returns whether seeding occurred.
    pub fn initialize(&self) -> ReadingResult<bool> {
        if self.slots.get(READINGS_SLOT_KEY)?.is_some() {
            return Ok(false);
        }

        self.slots.set(READINGS_SLOT_KEY, "[]")?;
        info!("event=reading_log_seed module=readings status=ok");
        Ok(true)
    }

    /// Validates and appends one reading, assigning id and timestamp.
    ///
    /// `recorded_at_ms` is caller-provided so the log stays clock-free and
    /// deterministic under test.
    pub fn record(
        &self,
        draft: ReadingDraft,
        recorded_at_ms: i64,
    ) -> ReadingResult<NetworkReading> {
        draft.validate()?;

        let mut readings = self.load()?;
        let reading = NetworkReading {
            id: readings.len() as i64 + 1,
            timestamp_ms: recorded_at_ms,
            availability: draft.signal_dbm.is_some(),
            operator: draft.operator,
            signal_dbm: draft.signal_dbm,
            network_type: draft.network_type,
            latitude: draft.latitude,
            longitude: draft.longitude,
        };
        readings.push(reading.clone());

        let payload = serde_json::to_string(&readings).map_err(ReadingError::Encode)?;
        self.slots.set(READINGS_SLOT_KEY, &payload)?;
        info!(
            "event=reading_append module=readings status=ok id={} operator={}",
            reading.id, reading.operator
        );
        Ok(reading)
    }

    /// Returns the most recent reading, if any.
    pub fn latest(&self) -> ReadingResult<Option<NetworkReading>> {
        let mut readings = self.load()?;
        Ok(readings.pop())
    }

    /// Returns readings recorded at or after `cutoff_ms`, in append order.
    pub fn since(&self, cutoff_ms: i64) -> ReadingResult<Vec<NetworkReading>> {
        let readings = self.load()?;
        Ok(readings
            .into_iter()
            .filter(|reading| reading.timestamp_ms >= cutoff_ms)
            .collect())
    }

    fn load(&self) -> ReadingResult<Vec<NetworkReading>> {
        let payload = match self.slots.get(READINGS_SLOT_KEY)? {
            Some(value) if !value.is_empty() => value,
            _ => return Ok(Vec::new()),
        };

        serde_json::from_str(&payload).map_err(|source| ReadingError::Format {
            slot: READINGS_SLOT_KEY,
            source,
        })
    }
}
