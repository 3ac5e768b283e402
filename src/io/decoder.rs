//! Audio decoding using Symphonia

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::AnalysisError;

/// Decoded audio: planar PCM channels plus the source sample rate
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// One f32 sample buffer per channel
    pub channels: Vec<Vec<f32>>,

    /// Source sample rate in Hz
    pub sample_rate: u32,
}

impl DecodedAudio {
    /// Number of frames (samples per channel)
    pub fn num_frames(&self) -> usize {
        self.channels.first().map(|ch| ch.len()).unwrap_or(0)
    }
}

/// Decode an audio file to planar f32 PCM
///
/// Probes the container by extension hint, picks the first playable track,
/// and decodes every packet. Corrupt packets are skipped; end of stream ends
/// decoding.
///
/// # Errors
///
/// - `DecodingError` if the file cannot be opened, probed, or decoded
/// - `UnsupportedFormat` if no playable track or codec is available
pub fn decode_audio(path: &Path) -> Result<DecodedAudio, AnalysisError> {
    log::debug!("Decoding audio file: {}", path.display());

    let src = File::open(path)
        .map_err(|e| AnalysisError::DecodingError(format!("Cannot open {}: {}", path.display(), e)))?;
    let mss = MediaSourceStream::new(Box::new(src), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| AnalysisError::UnsupportedFormat(format!("Probe failed: {}", e)))?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| {
            AnalysisError::UnsupportedFormat("No playable audio track found".to_string())
        })?;

    let track_id = track.id;
    let sample_rate = track.codec_params.sample_rate.unwrap_or(44100);

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| AnalysisError::UnsupportedFormat(format!("No decoder for track: {}", e)))?;

    let mut channels: Vec<Vec<f32>> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            // End of stream
            Err(SymphoniaError::IoError(_)) => break,
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => {
                return Err(AnalysisError::DecodingError(format!(
                    "Packet read failed: {}",
                    e
                )))
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => append_planar(decoded, &mut channels)?,
            // Corrupt packets happen; skip them
            Err(SymphoniaError::DecodeError(e)) => {
                log::warn!("Skipping corrupt packet: {}", e);
            }
            Err(e) => {
                return Err(AnalysisError::DecodingError(format!(
                    "Decode failed: {}",
                    e
                )))
            }
        }
    }

    if channels.is_empty() || channels[0].is_empty() {
        return Err(AnalysisError::DecodingError(
            "Decoded no audio samples".to_string(),
        ));
    }

    log::debug!(
        "Decoded {} channels, {} frames at {} Hz",
        channels.len(),
        channels[0].len(),
        sample_rate
    );

    Ok(DecodedAudio {
        channels,
        sample_rate,
    })
}

/// Append one decoded buffer to the planar channel accumulators, converting
/// to f32 in [-1, 1]
fn append_planar(
    decoded: AudioBufferRef<'_>,
    channels: &mut Vec<Vec<f32>>,
) -> Result<(), AnalysisError> {
    let num_channels = decoded.spec().channels.count();
    if channels.is_empty() {
        channels.resize(num_channels, Vec::new());
    }
    if channels.len() != num_channels {
        return Err(AnalysisError::DecodingError(format!(
            "Channel count changed mid-stream: {} -> {}",
            channels.len(),
            num_channels
        )));
    }

    match decoded {
        AudioBufferRef::F32(buf) => {
            for (ch, out) in channels.iter_mut().enumerate() {
                out.extend_from_slice(buf.chan(ch));
            }
        }
        AudioBufferRef::F64(buf) => {
            for (ch, out) in channels.iter_mut().enumerate() {
                out.extend(buf.chan(ch).iter().map(|&s| s as f32));
            }
        }
        AudioBufferRef::S8(buf) => {
            for (ch, out) in channels.iter_mut().enumerate() {
                out.extend(buf.chan(ch).iter().map(|&s| s as f32 / 128.0));
            }
        }
        AudioBufferRef::S16(buf) => {
            for (ch, out) in channels.iter_mut().enumerate() {
                out.extend(buf.chan(ch).iter().map(|&s| s as f32 / 32768.0));
            }
        }
        AudioBufferRef::S24(buf) => {
            for (ch, out) in channels.iter_mut().enumerate() {
                out.extend(
                    buf.chan(ch)
                        .iter()
                        .map(|&s| s.inner() as f32 / 8_388_608.0),
                );
            }
        }
        AudioBufferRef::S32(buf) => {
            for (ch, out) in channels.iter_mut().enumerate() {
                out.extend(buf.chan(ch).iter().map(|&s| s as f32 / 2_147_483_648.0));
            }
        }
        AudioBufferRef::U8(buf) => {
            for (ch, out) in channels.iter_mut().enumerate() {
                out.extend(buf.chan(ch).iter().map(|&s| (s as f32 - 128.0) / 128.0));
            }
        }
        AudioBufferRef::U16(buf) => {
            for (ch, out) in channels.iter_mut().enumerate() {
                out.extend(
                    buf.chan(ch)
                        .iter()
                        .map(|&s| (s as f32 - 32768.0) / 32768.0),
                );
            }
        }
        AudioBufferRef::U24(buf) => {
            for (ch, out) in channels.iter_mut().enumerate() {
                out.extend(
                    buf.chan(ch)
                        .iter()
                        .map(|&s| (s.inner() as f32 - 8_388_608.0) / 8_388_608.0),
                );
            }
        }
        AudioBufferRef::U32(buf) => {
            for (ch, out) in channels.iter_mut().enumerate() {
                out.extend(
                    buf.chan(ch)
                        .iter()
                        .map(|&s| (s as f64 - 2_147_483_648.0) as f32 / 2_147_483_648.0),
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_decoding_error() {
        let result = decode_audio(Path::new("/nonexistent/audio.wav"));
        assert!(matches!(result, Err(AnalysisError::DecodingError(_))));
    }
}
