//! Temporal label smoothing
//!
//! Removes frame-level flicker in the per-frame chord label sequence with a
//! fixed-width 1-D median filter. Labels are treated as ordinal values for
//! the median; the label enumeration is arbitrary but fixed, so the result is
//! deterministic even if not always musically meaningful across distant
//! template indices.

use crate::error::AnalysisError;

/// Apply a 1-D median filter to a label index sequence
///
/// Boundary policy: the sequence is zero-padded by `window / 2` on each side
/// before taking the median of each centered window, and the output is the
/// same length as the input. A window of 1 is a no-op.
///
/// # Arguments
///
/// * `indices` - Per-frame template indices
/// * `window` - Filter window in frames; must be odd and >= 1
///
/// # Returns
///
/// Smoothed index sequence, same length as the input
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `window` is zero or even.
pub fn median_smooth(indices: &[usize], window: usize) -> Result<Vec<usize>, AnalysisError> {
    if window == 0 || window % 2 == 0 {
        return Err(AnalysisError::InvalidInput(format!(
            "Median window must be odd and >= 1, got {}",
            window
        )));
    }

    if window == 1 || indices.is_empty() {
        return Ok(indices.to_vec());
    }

    log::debug!(
        "Median smoothing {} labels with window {}",
        indices.len(),
        window
    );

    let half = window / 2;
    let len = indices.len() as isize;
    let mut smoothed = Vec::with_capacity(indices.len());
    let mut buf = vec![0usize; window];

    for i in 0..indices.len() {
        for (j, slot) in buf.iter_mut().enumerate() {
            let pos = i as isize + j as isize - half as isize;
            *slot = if pos < 0 || pos >= len {
                0
            } else {
                indices[pos as usize]
            };
        }
        buf.sort_unstable();
        smoothed.push(buf[half]);
    }

    Ok(smoothed)
}
