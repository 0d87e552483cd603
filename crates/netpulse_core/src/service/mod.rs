//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate slot-store access into use-case level APIs.
//! - Keep callers decoupled from storage and payload details.

pub mod catalog;
pub mod readings;
