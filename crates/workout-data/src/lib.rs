//! Data layer for the workout analyzer.
//!
//! Owns the in-memory session log, loads it from JSON workout documents, and
//! runs the aggregation queries and report assembly over it.

pub mod aggregator;
pub mod analysis;
pub mod log;
pub mod reader;
