//! Result aggregation modules
//!
//! Final output types of the engine:
//! - Chord labels and timed intervals
//! - Analysis metadata

pub mod metadata;
pub mod result;
