//! Harmonic/percussive source separation
//!
//! Median-filtering HPSS over an STFT magnitude spectrogram: harmonic
//! content is steady across time (horizontal ridges), percussive content is
//! broadband and transient (vertical ridges). Median-filtering the magnitude
//! along each axis enhances one structure and suppresses the other; soft
//! Wiener-style masks built from the two enhanced spectrograms split the
//! complex spectrogram, and the components are reconstructed by inverse
//! STFT. Chords live in the harmonic component.
//!
//! # Reference
//!
//! Fitzgerald, D. (2010). Harmonic/Percussive Separation Using Median
//! Filtering. *Proc. DAFx-10*.

use rustfft::num_complex::Complex;

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::features::stft::Stft;

/// Numerical stability epsilon
const EPSILON: f32 = 1e-10;

/// Split a waveform into harmonic and percussive components
///
/// # Arguments
///
/// * `samples` - Mono audio samples
/// * `config` - HPSS parameters (frame size, hop, kernel size, mask power)
///
/// # Returns
///
/// `(harmonic, percussive)` waveforms, each the same length as the input
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` on invalid parameters.
pub fn hpss_decompose(
    samples: &[f32],
    config: &AnalysisConfig,
) -> Result<(Vec<f32>, Vec<f32>), AnalysisError> {
    if config.hpss_kernel_size == 0 || config.hpss_kernel_size % 2 == 0 {
        return Err(AnalysisError::InvalidInput(format!(
            "HPSS kernel size must be odd and >= 1, got {}",
            config.hpss_kernel_size
        )));
    }
    if config.hpss_power <= 0.0 {
        return Err(AnalysisError::InvalidInput(format!(
            "HPSS mask power must be > 0, got {}",
            config.hpss_power
        )));
    }

    if samples.is_empty() {
        return Ok((Vec::new(), Vec::new()));
    }

    log::debug!(
        "HPSS: {} samples, frame={}, hop={}, kernel={}",
        samples.len(),
        config.hpss_frame_size,
        config.hop_size,
        config.hpss_kernel_size
    );

    let stft = Stft::new(config.hpss_frame_size, config.hop_size)?;
    let spectrogram = stft.forward(samples);
    let num_frames = spectrogram.len();
    // Real input: bins above Nyquist mirror the lower half, so masks are
    // computed on bins 0..=n/2 and applied symmetrically.
    let num_bins = config.hpss_frame_size / 2 + 1;

    // Magnitudes, frame-major
    let mut magnitude = vec![vec![0.0f32; num_bins]; num_frames];
    for (t, spectrum) in spectrogram.iter().enumerate() {
        for k in 0..num_bins {
            magnitude[t][k] = spectrum[k].norm();
        }
    }

    let kernel = config.hpss_kernel_size;

    // Harmonic enhancement: median across time at each frequency bin
    let mut harmonic_mag = vec![vec![0.0f32; num_bins]; num_frames];
    let mut column = vec![0.0f32; num_frames];
    for k in 0..num_bins {
        for t in 0..num_frames {
            column[t] = magnitude[t][k];
        }
        let filtered = median_filter_1d(&column, kernel);
        for t in 0..num_frames {
            harmonic_mag[t][k] = filtered[t];
        }
    }

    // Percussive enhancement: median across frequency in each frame
    let mut percussive_mag = vec![vec![0.0f32; num_bins]; num_frames];
    for t in 0..num_frames {
        percussive_mag[t] = median_filter_1d(&magnitude[t], kernel);
    }

    // Soft masks and masked spectrograms
    let power = config.hpss_power;
    let mut harmonic_spec = vec![vec![Complex::new(0.0f32, 0.0f32); config.hpss_frame_size]; num_frames];
    let mut percussive_spec = harmonic_spec.clone();

    for t in 0..num_frames {
        for k in 0..num_bins {
            let h = harmonic_mag[t][k].powf(power);
            let p = percussive_mag[t][k].powf(power);
            let denom = h + p;
            let (mask_h, mask_p) = if denom > EPSILON {
                (h / denom, p / denom)
            } else {
                (0.0, 0.0)
            };

            harmonic_spec[t][k] = spectrogram[t][k] * mask_h;
            percussive_spec[t][k] = spectrogram[t][k] * mask_p;

            // Mirror onto the conjugate bin
            if k > 0 && k < config.hpss_frame_size - k {
                let mirror = config.hpss_frame_size - k;
                harmonic_spec[t][mirror] = spectrogram[t][mirror] * mask_h;
                percussive_spec[t][mirror] = spectrogram[t][mirror] * mask_p;
            }
        }
    }

    let harmonic = stft.inverse(&harmonic_spec, samples.len());
    let percussive = stft.inverse(&percussive_spec, samples.len());

    Ok((harmonic, percussive))
}

/// Zero-padded 1-D median filter over magnitudes
fn median_filter_1d(values: &[f32], kernel: usize) -> Vec<f32> {
    if kernel == 1 || values.is_empty() {
        return values.to_vec();
    }

    let half = kernel / 2;
    let len = values.len() as isize;
    let mut out = Vec::with_capacity(values.len());
    let mut buf = vec![0.0f32; kernel];

    for i in 0..values.len() {
        for (j, slot) in buf.iter_mut().enumerate() {
            let pos = i as isize + j as isize - half as isize;
            *slot = if pos < 0 || pos >= len {
                0.0
            } else {
                values[pos as usize]
            };
        }
        buf.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        out.push(buf[half]);
    }

    out
}
