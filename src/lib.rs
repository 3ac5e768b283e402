//! # Chordal DSP
//!
//! A chord recognition engine: labels an audio recording with a time-aligned
//! sequence of major/minor triads.
//!
//! ## Pipeline
//!
//! ```text
//! Audio Input → Resample (22.05 kHz) → Harmonic/Percussive Separation
//!             → Chromagram → Classify → Smooth → Segment → Intervals
//! ```
//!
//! The recognition core (classify/smooth/segment) is a pure function over an
//! immutable chromagram: 24 unit-norm triad templates are matched per frame
//! by cosine similarity, the per-frame labels are median-filtered to remove
//! flicker, and maximal constant-chord runs become timed intervals.
//!
//! ## Quick Start
//!
//! ```no_run
//! use chordal_dsp::{extract_chords, AnalysisConfig};
//!
//! // Mono samples, normalized to [-1.0, 1.0]
//! let samples: Vec<f32> = vec![];
//! let analysis = extract_chords(&samples, 44100, &AnalysisConfig::default())?;
//!
//! for interval in &analysis.intervals {
//!     println!("{}: {:.3} - {:.3}", interval.chord, interval.start, interval.end);
//! }
//! # Ok::<(), chordal_dsp::AnalysisError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod io;
pub mod preprocessing;

// Re-export main types
pub use analysis::metadata::AnalysisMetadata;
pub use analysis::result::{Chord, ChordAnalysis, ChordInterval};
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use features::chords::{recognize_chords, ChordTemplates};
pub use features::chroma::Chromagram;

/// Main chord extraction function
///
/// Runs the full pipeline on mono audio samples: resample to the engine
/// rate, split off the harmonic component, compute the chromagram, and run
/// the recognition core.
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate of `samples` in Hz
/// * `config` - Analysis configuration parameters
///
/// # Returns
///
/// `ChordAnalysis` with the time-ordered interval list and run metadata
///
/// # Errors
///
/// Returns `AnalysisError` on empty input, invalid parameters, or any
/// processing failure; no partial results are produced.
///
/// # Example
///
/// ```no_run
/// use chordal_dsp::{extract_chords, AnalysisConfig};
///
/// let samples = vec![0.0f32; 22050 * 30];
/// let analysis = extract_chords(&samples, 22050, &AnalysisConfig::default())?;
/// # Ok::<(), chordal_dsp::AnalysisError>(())
/// ```
pub fn extract_chords(
    samples: &[f32],
    sample_rate: u32,
    config: &AnalysisConfig,
) -> Result<ChordAnalysis, AnalysisError> {
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!(
        "Starting chord extraction: {} samples at {} Hz",
        samples.len(),
        sample_rate
    );

    if samples.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "Empty audio samples".to_string(),
        ));
    }

    if sample_rate == 0 {
        return Err(AnalysisError::InvalidInput(
            "Invalid sample rate".to_string(),
        ));
    }

    // Stage 1: resample to the engine rate
    let resampled =
        preprocessing::resampler::resample_linear(samples, sample_rate, config.target_sample_rate)?;

    // Stage 2: keep only the harmonic component
    let (harmonic, _percussive) = features::hpss::hpss_decompose(&resampled, config)?;

    // Stage 3: chromagram
    let chroma = features::chroma::extract_chroma(&harmonic, config.target_sample_rate, config)?;

    // Stage 4: recognition core
    let templates = ChordTemplates::new();
    let intervals = recognize_chords(&chroma, &templates, config)?;

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;
    log::debug!(
        "Extracted {} chord intervals from {} frames in {:.2} ms",
        intervals.len(),
        chroma.num_frames(),
        processing_time_ms
    );

    Ok(ChordAnalysis {
        intervals,
        metadata: AnalysisMetadata {
            duration_seconds: resampled.len() as f32 / config.target_sample_rate as f32,
            sample_rate: config.target_sample_rate,
            frames_analyzed: chroma.num_frames(),
            processing_time_ms,
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
        },
    })
}
