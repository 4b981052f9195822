//! Core types for the workout performance analyzer.
//!
//! Holds the set/session data model, the error taxonomy, the pure volume and
//! weight calculations, date-format checks, number formatting helpers and the
//! command-line settings shared by the binary.

pub mod calculations;
pub mod dates;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
