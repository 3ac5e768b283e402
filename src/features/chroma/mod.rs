//! Chromagram types and extraction
//!
//! A chromagram is a time-by-pitch-class energy matrix: for each analysis
//! frame, how much energy each of the 12 pitch classes carries.

pub mod extractor;
pub mod normalization;

pub use extractor::extract_chroma;

use crate::error::AnalysisError;

/// A chromagram: T frames of 12 non-negative pitch-class energies
///
/// Carries the sample rate and hop length used to produce it so frame
/// indices can be converted to timestamps. The engine reads it but never
/// mutates it.
#[derive(Debug, Clone)]
pub struct Chromagram {
    /// Per-frame pitch-class energies (each frame has 12 elements)
    pub frames: Vec<Vec<f32>>,

    /// Sample rate of the source waveform in Hz
    pub sample_rate: u32,

    /// Hop length between frames in samples
    pub hop_size: usize,
}

impl Chromagram {
    /// Create a chromagram, validating its shape
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if any frame does not have 12
    /// elements, or if `sample_rate`/`hop_size` is zero.
    pub fn new(
        frames: Vec<Vec<f32>>,
        sample_rate: u32,
        hop_size: usize,
    ) -> Result<Self, AnalysisError> {
        if sample_rate == 0 {
            return Err(AnalysisError::InvalidInput(
                "Sample rate must be > 0".to_string(),
            ));
        }
        if hop_size == 0 {
            return Err(AnalysisError::InvalidInput(
                "Hop size must be > 0".to_string(),
            ));
        }
        for (i, frame) in frames.iter().enumerate() {
            if frame.len() != 12 {
                return Err(AnalysisError::InvalidInput(format!(
                    "Chroma frame {} has {} elements, expected 12",
                    i,
                    frame.len()
                )));
            }
        }
        Ok(Self {
            frames,
            sample_rate,
            hop_size,
        })
    }

    /// Number of frames T
    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    /// Whether the chromagram has no frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Timestamp of frame `i` in seconds (`i * hop / sample_rate`)
    pub fn frame_time(&self, i: usize) -> f64 {
        (i * self.hop_size) as f64 / self.sample_rate as f64
    }

    /// Timestamps of all frames in seconds
    pub fn frame_times(&self) -> Vec<f64> {
        (0..self.frames.len()).map(|i| self.frame_time(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_times() {
        let chroma = Chromagram::new(vec![vec![0.0; 12]; 3], 22050, 512).unwrap();
        let times = chroma.frame_times();
        assert_eq!(times.len(), 3);
        assert_eq!(times[0], 0.0);
        assert!((times[1] - 512.0 / 22050.0).abs() < 1e-12);
        assert!((times[2] - 1024.0 / 22050.0).abs() < 1e-12);
    }

    #[test]
    fn test_shape_validation() {
        let result = Chromagram::new(vec![vec![0.0; 11]], 22050, 512);
        assert!(result.is_err());

        let result = Chromagram::new(vec![vec![0.0; 12]], 0, 512);
        assert!(result.is_err());

        let result = Chromagram::new(vec![vec![0.0; 12]], 22050, 0);
        assert!(result.is_err());
    }
}
