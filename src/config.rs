//! Configuration parameters for chord extraction

/// Chord extraction configuration parameters
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // Engine rate
    /// Sample rate the engine operates at (default: 22050)
    /// Input audio is resampled to this rate before analysis. 22.05 kHz keeps
    /// enough frequency content for triads while halving the work.
    pub target_sample_rate: u32,

    /// Hop size between analysis frames in samples (default: 512)
    /// Fixes the time resolution of the chromagram (~23 ms at 22050 Hz).
    pub hop_size: usize,

    // Chroma extraction
    /// FFT frame size for chroma extraction (default: 4096)
    pub chroma_frame_size: usize,

    /// Reference tuning frequency in Hz (default: 440.0, A4)
    pub center_frequency: f32,

    /// Enable soft chroma mapping (default: true)
    /// Soft mapping weights each frequency bin by its distance to the nearest
    /// semitone instead of assigning it fully, which is more robust to
    /// detuning and bin quantization.
    pub soft_chroma_mapping: bool,

    /// Soft mapping standard deviation in semitones (default: 0.5)
    pub soft_mapping_sigma: f32,

    /// Lowest frequency mapped into the chromagram in Hz (default: 55.0, A1)
    pub min_frequency: f32,

    /// Highest frequency mapped into the chromagram in Hz (default: 5000.0)
    pub max_frequency: f32,

    // Harmonic/percussive separation
    /// FFT frame size for HPSS (default: 2048)
    pub hpss_frame_size: usize,

    /// Median filter kernel size for HPSS, in frames/bins (default: 31)
    pub hpss_kernel_size: usize,

    /// Soft mask exponent for HPSS (default: 2.0, Wiener-style masks)
    pub hpss_power: f32,

    // Chord smoothing
    /// Median filter window over the per-frame chord labels, in frames
    /// (default: 15, ~0.35 s at hop 512 / 22050 Hz). Must be odd and >= 1;
    /// a window of 1 disables smoothing.
    pub median_window: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            target_sample_rate: 22050,
            hop_size: 512,
            chroma_frame_size: 4096,
            center_frequency: 440.0,
            soft_chroma_mapping: true,
            soft_mapping_sigma: 0.5,
            min_frequency: 55.0,
            max_frequency: 5000.0,
            hpss_frame_size: 2048,
            hpss_kernel_size: 31,
            hpss_power: 2.0,
            median_window: 15,
        }
    }
}
