//! Chroma extraction
//!
//! Computes a constant-Q-style chromagram: an STFT magnitude spectrogram is
//! folded onto the 12 pitch classes on a log-frequency axis. Each FFT bin
//! contributes its energy to the pitch class of its nearest semitone,
//! optionally weighted by a Gaussian in semitone distance (soft mapping),
//! which is more robust to detuning and bin quantization than hard
//! assignment.

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::features::stft::Stft;

use super::Chromagram;

/// Per-bin pitch-class assignment, precomputed once per extraction
struct BinMapping {
    /// FFT bin index
    bin: usize,
    /// Target pitch class (0 = C, ..., 11 = B)
    pitch_class: usize,
    /// Contribution weight (1.0 for hard mapping)
    weight: f32,
}

/// Extract a chromagram from audio samples
///
/// Frames are centered, so frame `i` maps to time `i * hop / sample_rate`
/// and the frame count is `1 + samples.len() / hop`. Only frequencies inside
/// `[config.min_frequency, config.max_frequency]` contribute.
///
/// # Arguments
///
/// * `samples` - Mono audio samples at `sample_rate`
/// * `sample_rate` - Sample rate in Hz
/// * `config` - Chroma parameters (frame size, hop, tuning, soft mapping)
///
/// # Returns
///
/// A [`Chromagram`] with non-negative energies; empty input yields a
/// zero-frame chromagram.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` on invalid parameters.
pub fn extract_chroma(
    samples: &[f32],
    sample_rate: u32,
    config: &AnalysisConfig,
) -> Result<Chromagram, AnalysisError> {
    if sample_rate == 0 {
        return Err(AnalysisError::InvalidInput(
            "Sample rate must be > 0".to_string(),
        ));
    }

    if samples.is_empty() {
        return Chromagram::new(Vec::new(), sample_rate, config.hop_size);
    }

    log::debug!(
        "Extracting chroma: {} samples at {} Hz, frame={}, hop={}",
        samples.len(),
        sample_rate,
        config.chroma_frame_size,
        config.hop_size
    );

    let stft = Stft::new(config.chroma_frame_size, config.hop_size)?;
    let mapping = build_bin_mapping(sample_rate, config)?;
    let spectrogram = stft.forward(samples);

    let frames: Vec<Vec<f32>> = spectrogram
        .iter()
        .map(|spectrum| {
            let mut chroma = vec![0.0f32; 12];
            for m in &mapping {
                let energy = spectrum[m.bin].norm_sqr();
                chroma[m.pitch_class] += energy * m.weight;
            }
            chroma
        })
        .collect();

    Chromagram::new(frames, sample_rate, config.hop_size)
}

/// Precompute the bin -> pitch-class mapping for this rate and config
fn build_bin_mapping(
    sample_rate: u32,
    config: &AnalysisConfig,
) -> Result<Vec<BinMapping>, AnalysisError> {
    if config.center_frequency <= 0.0 {
        return Err(AnalysisError::InvalidInput(format!(
            "Tuning reference must be > 0 Hz, got {}",
            config.center_frequency
        )));
    }
    if config.min_frequency <= 0.0 || config.max_frequency <= config.min_frequency {
        return Err(AnalysisError::InvalidInput(format!(
            "Invalid frequency band: [{}, {}]",
            config.min_frequency, config.max_frequency
        )));
    }

    let n_fft = config.chroma_frame_size;
    let nyquist = sample_rate as f32 / 2.0;
    let fmax = config.max_frequency.min(nyquist);

    let mut mapping = Vec::new();
    // Bin 0 is DC; only positive frequencies up to Nyquist carry pitch
    for bin in 1..=n_fft / 2 {
        let freq = bin as f32 * sample_rate as f32 / n_fft as f32;
        if freq < config.min_frequency || freq > fmax {
            continue;
        }

        // Fractional MIDI number relative to the tuning reference (A4 = 69)
        let midi = 69.0 + 12.0 * (freq / config.center_frequency).log2();
        let nearest = midi.round();
        let pitch_class = (nearest as i32).rem_euclid(12) as usize;

        let weight = if config.soft_chroma_mapping {
            let d = (midi - nearest) / config.soft_mapping_sigma;
            (-0.5 * d * d).exp()
        } else {
            1.0
        };

        mapping.push(BinMapping {
            bin,
            pitch_class,
            weight,
        });
    }

    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f32, duration_s: f32, sample_rate: u32) -> Vec<f32> {
        let n = (duration_s * sample_rate as f32) as usize;
        (0..n)
            .map(|i| {
                (2.0 * std::f32::consts::PI * freq * i as f32 / sample_rate as f32).sin() * 0.5
            })
            .collect()
    }

    fn dominant_pitch_class(chroma: &Chromagram) -> usize {
        let mut totals = [0.0f32; 12];
        for frame in &chroma.frames {
            for (pc, &e) in frame.iter().enumerate() {
                totals[pc] += e;
            }
        }
        totals
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(pc, _)| pc)
            .unwrap()
    }

    #[test]
    fn test_empty_samples_yield_zero_frames() {
        let config = AnalysisConfig::default();
        let chroma = extract_chroma(&[], 22050, &config).unwrap();
        assert_eq!(chroma.num_frames(), 0);
    }

    #[test]
    fn test_frame_count_convention() {
        let config = AnalysisConfig::default();
        let samples = vec![0.0f32; 22050];
        let chroma = extract_chroma(&samples, 22050, &config).unwrap();
        assert_eq!(chroma.num_frames(), 22050 / config.hop_size + 1);
    }

    #[test]
    fn test_a440_maps_to_pitch_class_a() {
        let config = AnalysisConfig::default();
        let samples = sine(440.0, 1.0, 22050);
        let chroma = extract_chroma(&samples, 22050, &config).unwrap();
        assert_eq!(dominant_pitch_class(&chroma), 9); // A
    }

    #[test]
    fn test_middle_c_maps_to_pitch_class_c() {
        let config = AnalysisConfig::default();
        let samples = sine(261.63, 1.0, 22050);
        let chroma = extract_chroma(&samples, 22050, &config).unwrap();
        assert_eq!(dominant_pitch_class(&chroma), 0); // C
    }

    #[test]
    fn test_energies_non_negative() {
        let config = AnalysisConfig::default();
        let samples = sine(330.0, 0.5, 22050);
        let chroma = extract_chroma(&samples, 22050, &config).unwrap();
        for frame in &chroma.frames {
            assert!(frame.iter().all(|&e| e >= 0.0));
        }
    }

    #[test]
    fn test_invalid_band_rejected() {
        let mut config = AnalysisConfig::default();
        config.min_frequency = 500.0;
        config.max_frequency = 100.0;
        let result = extract_chroma(&[0.0; 1024], 22050, &config);
        assert!(result.is_err());
    }
}
