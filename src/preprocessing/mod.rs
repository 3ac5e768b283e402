//! Audio preprocessing modules
//!
//! Utilities for preparing decoded audio for analysis:
//! - Channel downmix (N channels to mono)
//! - Resampling to the engine rate

pub mod channel_mixer;
pub mod resampler;
