//! Chord extraction command-line tool
//!
//! Usage:
//!   chord-extractor <audio-file>
//!
//! On success, prints one JSON array of chord intervals to stdout:
//!   [{"chord":"C","start":0.0,"end":2.345}, ...]
//!
//! On any failure, prints a single {"error": <message>} record to stderr and
//! exits non-zero.

use std::path::Path;
use std::process::ExitCode;

use chordal_dsp::io::decoder::decode_audio;
use chordal_dsp::preprocessing::channel_mixer::downmix_to_mono;
use chordal_dsp::{extract_chords, AnalysisConfig, AnalysisError, ChordInterval};

fn run(path: &str) -> Result<Vec<ChordInterval>, AnalysisError> {
    let decoded = decode_audio(Path::new(path))?;
    let mono = downmix_to_mono(&decoded.channels)?;
    let analysis = extract_chords(&mono, decoded.sample_rate, &AnalysisConfig::default())?;

    log::debug!(
        "{}: {} intervals over {:.2} s ({:.2} ms)",
        path,
        analysis.intervals.len(),
        analysis.metadata.duration_seconds,
        analysis.metadata.processing_time_ms
    );

    Ok(analysis.intervals)
}

fn emit_error(message: &str) -> ExitCode {
    eprintln!("{}", serde_json::json!({ "error": message }));
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = match args.next() {
        Some(path) => path,
        None => return emit_error("No input file provided."),
    };

    match run(&path) {
        Ok(intervals) => match serde_json::to_string(&intervals) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => emit_error(&format!("Serialization failed: {}", e)),
        },
        Err(e) => emit_error(&e.to_string()),
    }
}
