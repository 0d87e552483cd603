//! Network reading record and validation.
//!
//! # Responsibility
//! - Define the persisted shape of one sampled network reading.
//! - Validate caller-provided draft readings before persistence.
//!
//! # Invariants
//! - `id` is assigned by the reading log, sequential and 1-based.
//! - `availability` mirrors whether a signal level was measured.
//! - Signal levels outside the measurable dBm window are rejected.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Weakest measurable signal level; also reported when there is no signal.
pub const SIGNAL_FLOOR_DBM: i32 = -120;
/// Strongest expected signal level.
pub const SIGNAL_CEIL_DBM: i32 = -50;

/// Radio access technology reported by the modem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkType {
    #[serde(rename = "Unknown")]
    Unknown,
    #[serde(rename = "2G")]
    TwoG,
    #[serde(rename = "3G")]
    ThreeG,
    #[serde(rename = "4G")]
    FourG,
    #[serde(rename = "5G")]
    FiveG,
}

impl NetworkType {
    /// Maps a `+CGREG` registration status code to a network type.
    pub fn from_registration_code(code: i64) -> Self {
        match code {
            1 => Self::TwoG,
            2 => Self::ThreeG,
            3 => Self::FourG,
            4 => Self::FiveG,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::TwoG => "2G",
            Self::ThreeG => "3G",
            Self::FourG => "4G",
            Self::FiveG => "5G",
        }
    }
}

impl Display for NetworkType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stored network reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkReading {
    /// Sequential 1-based identifier assigned by the log.
    pub id: i64,
    /// Unix epoch milliseconds at record time.
    pub timestamp_ms: i64,
    pub operator: String,
    /// Measured signal level; `None` when the modem reported nothing usable.
    pub signal_dbm: Option<i32>,
    pub network_type: NetworkType,
    /// Whether a signal level was measured for this sample.
    pub availability: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Caller-provided reading before the log assigns identity and time.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingDraft {
    pub operator: String,
    pub signal_dbm: Option<i32>,
    pub network_type: NetworkType,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl ReadingDraft {
    /// Checks field ranges before the draft is persisted.
    pub fn validate(&self) -> Result<(), ReadingValidationError> {
        if let Some(dbm) = self.signal_dbm {
            if !(SIGNAL_FLOOR_DBM..=SIGNAL_CEIL_DBM).contains(&dbm) {
                return Err(ReadingValidationError::SignalOutOfRange(dbm));
            }
        }
        if let Some(latitude) = self.latitude {
            if !(-90.0..=90.0).contains(&latitude) {
                return Err(ReadingValidationError::LatitudeOutOfRange(latitude));
            }
        }
        if let Some(longitude) = self.longitude {
            if !(-180.0..=180.0).contains(&longitude) {
                return Err(ReadingValidationError::LongitudeOutOfRange(longitude));
            }
        }
        Ok(())
    }
}

/// Draft field range violations.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadingValidationError {
    SignalOutOfRange(i32),
    LatitudeOutOfRange(f64),
    LongitudeOutOfRange(f64),
}

impl Display for ReadingValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SignalOutOfRange(dbm) => write!(
                f,
                "signal level {dbm} dBm outside {SIGNAL_FLOOR_DBM}..={SIGNAL_CEIL_DBM}"
            ),
            Self::LatitudeOutOfRange(value) => write!(f, "latitude {value} outside -90..=90"),
            Self::LongitudeOutOfRange(value) => write!(f, "longitude {value} outside -180..=180"),
        }
    }
}

impl Error for ReadingValidationError {}
