//! Chord recognition engine
//!
//! Turns a chromagram into a smoothed, segmented chord timeline:
//! - Template bank (24 triads: 12 major + 12 minor)
//! - Per-frame cosine-similarity classification
//! - Median-filter label smoothing
//! - Run-length segmentation into timed intervals

pub mod classifier;
pub mod segmenter;
pub mod smoothing;
pub mod templates;

pub use classifier::classify_frames;
pub use segmenter::segment_chords;
pub use smoothing::median_smooth;
pub use templates::ChordTemplates;

use crate::analysis::result::ChordInterval;
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::features::chroma::Chromagram;

/// Run the full recognition chain: classify, smooth, segment
///
/// Pure, single-threaded-observable computation: the same chromagram always
/// produces byte-identical output. Inputs are never mutated. A zero-frame
/// chromagram is valid and yields an empty interval list.
///
/// # Arguments
///
/// * `chroma` - Chromagram to label
/// * `templates` - The 24-row triad template bank
/// * `config` - Engine parameters (median window)
///
/// # Errors
///
/// Returns `AnalysisError` on malformed frames, non-finite values, or an
/// invalid median window; the operation is all-or-nothing.
pub fn recognize_chords(
    chroma: &Chromagram,
    templates: &ChordTemplates,
    config: &AnalysisConfig,
) -> Result<Vec<ChordInterval>, AnalysisError> {
    if chroma.num_frames() == 0 {
        return Ok(Vec::new());
    }

    let best_idx = classify_frames(chroma, templates)?;
    let smoothed = median_smooth(&best_idx, config.median_window)?;
    let times = chroma.frame_times();
    segment_chords(&smoothed, templates, &times)
}
