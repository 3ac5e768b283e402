//! Sample rate conversion
//!
//! Linear-interpolation resampling to the engine rate.

use crate::error::AnalysisError;

/// Resample `samples` from `from_rate` to `to_rate` by linear interpolation
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if either rate is zero.
pub fn resample_linear(
    samples: &[f32],
    from_rate: u32,
    to_rate: u32,
) -> Result<Vec<f32>, AnalysisError> {
    if from_rate == 0 || to_rate == 0 {
        return Err(AnalysisError::InvalidInput(format!(
            "Sample rates must be > 0, got {} -> {}",
            from_rate, to_rate
        )));
    }

    if from_rate == to_rate || samples.is_empty() {
        return Ok(samples.to_vec());
    }

    log::debug!(
        "Resampling {} samples: {} Hz -> {} Hz",
        samples.len(),
        from_rate,
        to_rate
    );

    let ratio = to_rate as f64 / from_rate as f64;
    let out_len = (samples.len() as f64 * ratio).ceil() as usize;
    let mut out = Vec::with_capacity(out_len);

    for i in 0..out_len {
        let src = i as f64 / ratio;
        let i0 = src.floor() as usize;
        let frac = (src - i0 as f64) as f32;
        let a = samples[i0.min(samples.len() - 1)];
        let b = samples[(i0 + 1).min(samples.len() - 1)];
        out.push(a + (b - a) * frac);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_rate_passthrough() {
        let samples = vec![0.1, 0.2, 0.3];
        let out = resample_linear(&samples, 22050, 22050).unwrap();
        assert_eq!(out, samples);
    }

    #[test]
    fn test_zero_rate_rejected() {
        assert!(resample_linear(&[0.0], 0, 22050).is_err());
        assert!(resample_linear(&[0.0], 44100, 0).is_err());
    }

    #[test]
    fn test_downsample_halves_length() {
        let samples = vec![0.5f32; 44100];
        let out = resample_linear(&samples, 44100, 22050).unwrap();
        assert_eq!(out.len(), 22050);
    }

    #[test]
    fn test_constant_signal_preserved() {
        let samples = vec![0.25f32; 1000];
        let out = resample_linear(&samples, 48000, 22050).unwrap();
        assert!(out.iter().all(|&x| (x - 0.25).abs() < 1e-6));
    }

    #[test]
    fn test_tone_frequency_preserved() {
        // A 100 Hz ramp-free sine resampled 44100 -> 22050 should still cross
        // zero roughly every 110 output samples (half period).
        let sine: Vec<f32> = (0..44100)
            .map(|i| (2.0 * std::f32::consts::PI * 100.0 * i as f32 / 44100.0).sin())
            .collect();
        let out = resample_linear(&sine, 44100, 22050).unwrap();

        let crossings = out
            .windows(2)
            .filter(|w| (w[0] >= 0.0) != (w[1] >= 0.0))
            .count();
        // 100 Hz for 1 s -> ~200 zero crossings
        assert!(
            (crossings as i32 - 200).abs() <= 2,
            "expected ~200 crossings, got {}",
            crossings
        );
    }
}
