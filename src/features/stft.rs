//! Short-time Fourier transform utilities
//!
//! Shared by the chroma extractor and the harmonic/percussive separator.
//! Frames are centered: the input is zero-padded by `frame_size / 2` on each
//! side so frame `i` is centered on sample `i * hop_size` and maps to time
//! `i * hop_size / sample_rate`. Frame count is `1 + len / hop_size`.

use std::sync::Arc;

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};

use crate::error::AnalysisError;

/// Numerical stability epsilon
const EPSILON: f32 = 1e-10;

/// Hann-windowed STFT with centered frames
pub struct Stft {
    frame_size: usize,
    hop_size: usize,
    window: Vec<f32>,
    forward: Arc<dyn Fft<f32>>,
    inverse: Arc<dyn Fft<f32>>,
}

impl Stft {
    /// Create an STFT processor
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if `frame_size` is zero, odd, or
    /// smaller than `hop_size`, or if `hop_size` is zero.
    pub fn new(frame_size: usize, hop_size: usize) -> Result<Self, AnalysisError> {
        if frame_size == 0 || frame_size % 2 != 0 {
            return Err(AnalysisError::InvalidInput(format!(
                "Frame size must be even and > 0, got {}",
                frame_size
            )));
        }
        if hop_size == 0 || hop_size > frame_size {
            return Err(AnalysisError::InvalidInput(format!(
                "Hop size must be in 1..={}, got {}",
                frame_size, hop_size
            )));
        }

        // Periodic Hann window (summed squares are constant for hop = N/4,
        // which keeps the inverse transform exact)
        let window: Vec<f32> = (0..frame_size)
            .map(|n| {
                let t = 2.0 * std::f32::consts::PI * n as f32 / frame_size as f32;
                0.5 - 0.5 * t.cos()
            })
            .collect();

        let mut planner = FftPlanner::new();
        let forward = planner.plan_fft_forward(frame_size);
        let inverse = planner.plan_fft_inverse(frame_size);

        Ok(Self {
            frame_size,
            hop_size,
            window,
            forward,
            inverse,
        })
    }

    /// FFT frame size
    pub fn frame_size(&self) -> usize {
        self.frame_size
    }

    /// Hop size between frames
    pub fn hop_size(&self) -> usize {
        self.hop_size
    }

    /// Compute the complex spectrogram of `samples`
    ///
    /// Returns one full-length spectrum (all `frame_size` bins) per frame;
    /// `1 + samples.len() / hop_size` frames in total.
    pub fn forward(&self, samples: &[f32]) -> Vec<Vec<Complex<f32>>> {
        let half = self.frame_size / 2;
        let num_frames = samples.len() / self.hop_size + 1;
        let mut spectrogram = Vec::with_capacity(num_frames);
        let mut buf = vec![Complex::new(0.0f32, 0.0f32); self.frame_size];

        for frame_idx in 0..num_frames {
            // Centered frame: sample positions relative to the unpadded input
            let center = (frame_idx * self.hop_size) as isize;
            for (n, slot) in buf.iter_mut().enumerate() {
                let pos = center - half as isize + n as isize;
                let x = if pos < 0 || pos >= samples.len() as isize {
                    0.0
                } else {
                    samples[pos as usize]
                };
                *slot = Complex::new(x * self.window[n], 0.0);
            }
            self.forward.process(&mut buf);
            spectrogram.push(buf.clone());
        }

        spectrogram
    }

    /// Reconstruct a waveform from a complex spectrogram
    ///
    /// Windowed overlap-add with window-sum normalization; the inverse of
    /// [`Stft::forward`] up to numerical precision when `output_len` matches
    /// the original input length.
    pub fn inverse(&self, spectrogram: &[Vec<Complex<f32>>], output_len: usize) -> Vec<f32> {
        let half = self.frame_size / 2;
        let padded_len = (spectrogram.len().saturating_sub(1)) * self.hop_size + self.frame_size;
        let mut output = vec![0.0f32; padded_len];
        let mut window_sum = vec![0.0f32; padded_len];
        let mut buf = vec![Complex::new(0.0f32, 0.0f32); self.frame_size];

        let scale = 1.0 / self.frame_size as f32;
        for (frame_idx, spectrum) in spectrogram.iter().enumerate() {
            buf.copy_from_slice(spectrum);
            self.inverse.process(&mut buf);

            let offset = frame_idx * self.hop_size;
            for n in 0..self.frame_size {
                let w = self.window[n];
                output[offset + n] += buf[n].re * scale * w;
                window_sum[offset + n] += w * w;
            }
        }

        for (x, &w) in output.iter_mut().zip(window_sum.iter()) {
            if w > EPSILON {
                *x /= w;
            }
        }

        // Drop the centering pad and trim to the requested length
        output
            .into_iter()
            .skip(half)
            .take(output_len)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameters() {
        assert!(Stft::new(0, 512).is_err());
        assert!(Stft::new(2047, 512).is_err());
        assert!(Stft::new(2048, 0).is_err());
        assert!(Stft::new(512, 1024).is_err());
    }

    #[test]
    fn test_frame_count() {
        let stft = Stft::new(2048, 512).unwrap();
        let samples = vec![0.0f32; 22050];
        let spec = stft.forward(&samples);
        assert_eq!(spec.len(), 22050 / 512 + 1);
        assert_eq!(spec[0].len(), 2048);
    }

    #[test]
    fn test_round_trip_reconstruction() {
        let stft = Stft::new(2048, 512).unwrap();
        // A few mixed sinusoids, long enough to cover many hops
        let samples: Vec<f32> = (0..22050)
            .map(|i| {
                let t = i as f32 / 22050.0;
                0.5 * (2.0 * std::f32::consts::PI * 220.0 * t).sin()
                    + 0.3 * (2.0 * std::f32::consts::PI * 554.4 * t).sin()
            })
            .collect();

        let spec = stft.forward(&samples);
        let reconstructed = stft.inverse(&spec, samples.len());

        assert_eq!(reconstructed.len(), samples.len());
        // Skip the outermost hop on each side where the window sum tapers
        let margin = 2048;
        let max_err = samples[margin..samples.len() - margin]
            .iter()
            .zip(&reconstructed[margin..samples.len() - margin])
            .map(|(a, b)| (a - b).abs())
            .fold(0.0f32, f32::max);
        assert!(max_err < 1e-3, "round-trip error too large: {}", max_err);
    }
}
