//! Chord timeline segmentation
//!
//! Collapses the smoothed per-frame label sequence into a minimal ordered
//! list of constant-chord time intervals.
//!
//! # Algorithm
//!
//! Scan frames in order, keeping the currently open interval (label + start
//! time). When the label changes, close the open interval at the current
//! frame's timestamp and open a new one. After the scan, close the last open
//! interval at the final frame's own timestamp. The last frame contributes
//! no duration of its own.

use super::templates::ChordTemplates;
use crate::analysis::result::ChordInterval;
use crate::error::AnalysisError;

/// Segment a smoothed label sequence into chord intervals
///
/// # Arguments
///
/// * `smoothed` - Per-frame template indices after median smoothing
/// * `templates` - Template bank, used to resolve indices to labels
/// * `times` - Per-frame timestamps in seconds, same length as `smoothed`
///
/// # Returns
///
/// Time-ordered intervals covering `[times[0], times[T-1]]`, each rounded to
/// millisecond precision, with no gaps, no overlaps, and no two adjacent
/// intervals sharing a label. An empty input yields an empty list.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the lengths of `smoothed` and
/// `times` differ or an index is outside the 24-row bank.
pub fn segment_chords(
    smoothed: &[usize],
    templates: &ChordTemplates,
    times: &[f64],
) -> Result<Vec<ChordInterval>, AnalysisError> {
    if smoothed.len() != times.len() {
        return Err(AnalysisError::InvalidInput(format!(
            "Label/time length mismatch: {} labels, {} timestamps",
            smoothed.len(),
            times.len()
        )));
    }

    let mut intervals = Vec::new();
    let mut current: Option<(usize, f64)> = None; // (template index, start time)

    for (&idx, &time) in smoothed.iter().zip(times.iter()) {
        if idx >= templates.len() {
            return Err(AnalysisError::InvalidInput(format!(
                "Template index {} out of range (bank size {})",
                idx,
                templates.len()
            )));
        }

        match current {
            // Same chord, keep the interval open
            Some((open_idx, _)) if open_idx == idx => {}
            Some((open_idx, start)) => {
                intervals.push(ChordInterval {
                    chord: templates.label(open_idx),
                    start: round_ms(start),
                    end: round_ms(time),
                });
                current = Some((idx, time));
            }
            None => {
                current = Some((idx, time));
            }
        }
    }

    // Close the last open interval at the final frame's timestamp
    if let (Some((open_idx, start)), Some(&last_time)) = (current, times.last()) {
        intervals.push(ChordInterval {
            chord: templates.label(open_idx),
            start: round_ms(start),
            end: round_ms(last_time),
        });
    }

    log::debug!(
        "Segmented {} frames into {} chord intervals",
        smoothed.len(),
        intervals.len()
    );

    Ok(intervals)
}

/// Round a timestamp to millisecond precision
fn round_ms(t: f64) -> f64 {
    (t * 1000.0).round() / 1000.0
}
