//! Per-frame chord classification
//!
//! Scores every chroma frame against the 24 triad templates by cosine
//! similarity and picks the best match per frame. Frames are independent, so
//! classification is parallelized across frames; the output order is the
//! input frame order regardless of scheduling.

use rayon::prelude::*;

use super::templates::ChordTemplates;
use crate::error::AnalysisError;
use crate::features::chroma::normalization::normalize_l2;
use crate::features::chroma::Chromagram;

/// Classify every chroma frame against the template bank
///
/// Each frame is L2-normalized and scored against all 24 templates by dot
/// product (cosine similarity, since both sides are unit vectors). The best
/// template index per frame is selected with a stable argmax: on ties the
/// lowest index wins. A zero-energy frame normalizes to the zero vector,
/// scores 0 against every template, and therefore lands on index 0.
///
/// # Arguments
///
/// * `chroma` - Chromagram (T frames of 12 non-negative energies)
/// * `templates` - The 24-row triad template bank
///
/// # Returns
///
/// One template index per input frame, length T
///
/// # Errors
///
/// Returns `AnalysisError` if a frame does not have 12 elements
/// (`InvalidInput`) or contains non-finite values (`NumericalError`).
pub fn classify_frames(
    chroma: &Chromagram,
    templates: &ChordTemplates,
) -> Result<Vec<usize>, AnalysisError> {
    log::debug!(
        "Classifying {} chroma frames against {} templates",
        chroma.num_frames(),
        templates.len()
    );

    chroma
        .frames
        .par_iter()
        .enumerate()
        .map(|(frame_idx, frame)| classify_frame(frame_idx, frame, templates))
        .collect()
}

/// Classify a single chroma frame (stable argmax over template similarities)
fn classify_frame(
    frame_idx: usize,
    frame: &[f32],
    templates: &ChordTemplates,
) -> Result<usize, AnalysisError> {
    if frame.len() != 12 {
        return Err(AnalysisError::InvalidInput(format!(
            "Chroma frame {} has {} elements, expected 12",
            frame_idx,
            frame.len()
        )));
    }

    if frame.iter().any(|x| !x.is_finite()) {
        return Err(AnalysisError::NumericalError(format!(
            "Chroma frame {} contains non-finite values",
            frame_idx
        )));
    }

    let unit = normalize_l2(frame);

    let mut best_idx = 0usize;
    let mut best_score = f32::NEG_INFINITY;
    for (idx, template) in templates.iter() {
        let score = dot_product(&unit, template);
        // Strict comparison keeps the lowest index on ties
        if score > best_score {
            best_score = score;
            best_idx = idx;
        }
    }

    Ok(best_idx)
}

/// Compute dot product between two vectors
fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chromagram_from(frames: Vec<Vec<f32>>) -> Chromagram {
        Chromagram::new(frames, 22050, 512).unwrap()
    }

    /// Frame with unit energy at the given pitch classes
    fn frame_with(pitch_classes: &[usize]) -> Vec<f32> {
        let mut frame = vec![0.0f32; 12];
        for &pc in pitch_classes {
            frame[pc] = 1.0;
        }
        frame
    }

    #[test]
    fn test_classify_c_major_frame() {
        let templates = ChordTemplates::new();
        let chroma = chromagram_from(vec![frame_with(&[0, 4, 7])]);
        let best = classify_frames(&chroma, &templates).unwrap();
        assert_eq!(best, vec![0]); // C major
    }

    #[test]
    fn test_classify_a_minor_frame() {
        let templates = ChordTemplates::new();
        let chroma = chromagram_from(vec![frame_with(&[9, 0, 4])]);
        let best = classify_frames(&chroma, &templates).unwrap();
        assert_eq!(best, vec![19]); // Am
    }

    #[test]
    fn test_zero_frame_maps_to_index_zero() {
        // A silent frame scores 0 against every template; stable argmax
        // assigns it to index 0 ("C"). Deterministic, musically arbitrary.
        let templates = ChordTemplates::new();
        let chroma = chromagram_from(vec![vec![0.0; 12]]);
        let best = classify_frames(&chroma, &templates).unwrap();
        assert_eq!(best, vec![0]);
    }

    #[test]
    fn test_tie_break_lowest_index_wins() {
        // Energy on the union of the C and C# chord tones is exactly
        // equidistant from both templates; the lower index ("C") must win.
        let templates = ChordTemplates::new();
        let chroma = chromagram_from(vec![frame_with(&[0, 4, 7, 1, 5, 8])]);
        let best = classify_frames(&chroma, &templates).unwrap();
        assert_eq!(best, vec![0]);
    }

    #[test]
    fn test_classify_preserves_frame_order() {
        let templates = ChordTemplates::new();
        let chroma = chromagram_from(vec![
            frame_with(&[0, 4, 7]),  // C
            frame_with(&[9, 0, 4]),  // Am
            frame_with(&[7, 11, 2]), // G
            frame_with(&[0, 4, 7]),  // C
        ]);
        let best = classify_frames(&chroma, &templates).unwrap();
        assert_eq!(best, vec![0, 19, 14, 0]);
    }

    #[test]
    fn test_classify_empty_chromagram() {
        let templates = ChordTemplates::new();
        let chroma = chromagram_from(Vec::new());
        let best = classify_frames(&chroma, &templates).unwrap();
        assert!(best.is_empty());
    }

    #[test]
    fn test_non_finite_frame_is_fatal() {
        let templates = ChordTemplates::new();
        let mut frame = frame_with(&[0, 4, 7]);
        frame[3] = f32::NAN;
        let chroma = chromagram_from(vec![frame]);
        let result = classify_frames(&chroma, &templates);
        assert!(matches!(result, Err(AnalysisError::NumericalError(_))));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let templates = ChordTemplates::new();
        let frames: Vec<Vec<f32>> = (0..200)
            .map(|i| {
                let mut frame = vec![0.05f32; 12];
                frame[i % 12] = 1.0;
                frame[(i + 4) % 12] = 0.8;
                frame
            })
            .collect();
        let chroma = chromagram_from(frames);

        let first = classify_frames(&chroma, &templates).unwrap();
        let second = classify_frames(&chroma, &templates).unwrap();
        assert_eq!(first, second);
    }
}
