//! Feature extraction and recognition modules
//!
//! - Harmonic/percussive separation (chords live in the harmonic part)
//! - Chroma extraction
//! - Chord recognition (templates, classification, smoothing, segmentation)

pub mod chords;
pub mod chroma;
pub mod hpss;
pub mod stft;
