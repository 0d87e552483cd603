//! Parsing helpers for raw modem responses.
//!
//! # Responsibility
//! - Extract signal, operator, and registration data from AT command output.
//! - Convert measured levels into a user-facing quality percentage.
//!
//! # Invariants
//! - Parsers never panic on malformed input; they return `None` or `Unknown`.
//! - No serial I/O happens here; callers hand in the raw response text.

use crate::model::reading::{NetworkType, SIGNAL_CEIL_DBM, SIGNAL_FLOOR_DBM};
use once_cell::sync::Lazy;
use regex::Regex;

static CSQ_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+CSQ:\s*(\d+)\s*,\s*\d+").expect("valid CSQ regex"));
static COPS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\+COPS:\s*\d+\s*,\s*\d+\s*,\s*"([^"]*)""#).expect("valid COPS regex"));
static CGREG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+CGREG:\s*\d+\s*,\s*(\d+)").expect("valid CGREG regex"));

/// CSQ value reported when signal strength is not known or not detectable.
const CSQ_NO_SIGNAL: i32 = 99;

/// Extracts the signal level in dBm from a `+CSQ: <rssi>,<ber>` response.
///
/// CSQ 99 maps to the floor level (no signal); other values convert with
/// `2 * csq - 113`.
pub fn parse_signal_dbm(response: &str) -> Option<i32> {
    let captures = CSQ_RE.captures(response)?;
    let csq: i32 = captures[1].parse().ok()?;
    if csq == CSQ_NO_SIGNAL {
        return Some(SIGNAL_FLOOR_DBM);
    }
    Some(2 * csq - 113)
}

/// Extracts the operator name from a `+COPS: <mode>,<format>,"<name>"` response.
pub fn parse_operator(response: &str) -> Option<String> {
    COPS_RE
        .captures(response)
        .map(|captures| captures[1].to_string())
}

/// Maps the `+CGREG: <n>,<stat>` registration status to a network type.
pub fn parse_network_type(response: &str) -> NetworkType {
    CGREG_RE
        .captures(response)
        .and_then(|captures| captures[1].parse::<i64>().ok())
        .map(NetworkType::from_registration_code)
        .unwrap_or(NetworkType::Unknown)
}

/// Converts a dBm level to a 0-100 quality percentage, linear over the
/// measurable window.
pub fn quality_percent(dbm: i32) -> u8 {
    if dbm >= SIGNAL_CEIL_DBM {
        return 100;
    }
    if dbm <= SIGNAL_FLOOR_DBM {
        return 0;
    }
    let window = (SIGNAL_CEIL_DBM - SIGNAL_FLOOR_DBM) as f64;
    (((dbm - SIGNAL_FLOOR_DBM) as f64 / window) * 100.0) as u8
}
