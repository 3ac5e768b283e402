//! Channel downmix utilities (multichannel to mono)

use crate::error::AnalysisError;

/// Downmix planar multichannel audio to mono by uniform averaging
///
/// # Arguments
///
/// * `channels` - One sample buffer per channel, all the same length
///
/// # Returns
///
/// Mono samples, same length as each input channel
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if no channels are given or the
/// channel lengths differ.
pub fn downmix_to_mono(channels: &[Vec<f32>]) -> Result<Vec<f32>, AnalysisError> {
    let first = channels
        .first()
        .ok_or_else(|| AnalysisError::InvalidInput("No audio channels".to_string()))?;

    if channels.iter().any(|ch| ch.len() != first.len()) {
        return Err(AnalysisError::InvalidInput(
            "Channel length mismatch".to_string(),
        ));
    }

    if channels.len() == 1 {
        return Ok(first.clone());
    }

    log::debug!(
        "Downmixing {} channels of {} samples to mono",
        channels.len(),
        first.len()
    );

    let scale = 1.0 / channels.len() as f32;
    let mono = (0..first.len())
        .map(|i| channels.iter().map(|ch| ch[i]).sum::<f32>() * scale)
        .collect();

    Ok(mono)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mono_passthrough() {
        let channels = vec![vec![0.1, -0.2, 0.3]];
        let mono = downmix_to_mono(&channels).unwrap();
        assert_eq!(mono, vec![0.1, -0.2, 0.3]);
    }

    #[test]
    fn test_stereo_average() {
        let channels = vec![vec![1.0, 0.0, -1.0], vec![0.0, 1.0, -1.0]];
        let mono = downmix_to_mono(&channels).unwrap();
        assert_eq!(mono, vec![0.5, 0.5, -1.0]);
    }

    #[test]
    fn test_no_channels_rejected() {
        assert!(downmix_to_mono(&[]).is_err());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let channels = vec![vec![0.0; 3], vec![0.0; 4]];
        assert!(downmix_to_mono(&channels).is_err());
    }
}
