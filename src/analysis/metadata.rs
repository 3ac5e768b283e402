//! Analysis metadata structures

/// Metadata about a chord extraction run
#[derive(Debug, Clone)]
pub struct AnalysisMetadata {
    /// Duration of the analyzed audio in seconds (at the engine rate)
    pub duration_seconds: f32,

    /// Sample rate the engine ran at, in Hz
    pub sample_rate: u32,

    /// Number of chroma frames classified
    pub frames_analyzed: usize,

    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: f32,

    /// Algorithm version
    pub algorithm_version: String,
}

impl Default for AnalysisMetadata {
    fn default() -> Self {
        Self {
            duration_seconds: 0.0,
            sample_rate: 0,
            frames_analyzed: 0,
            processing_time_ms: 0.0,
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
