//! Chord extraction result types

use serde::{Deserialize, Serialize};

use super::metadata::AnalysisMetadata;

/// Pitch class names, C through B
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// A triad chord: root pitch class plus major/minor quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chord {
    /// Major triad (0 = C, 1 = C#, ..., 11 = B)
    Major(u32),
    /// Minor triad (0 = Cm, 1 = C#m, ..., 11 = Bm)
    Minor(u32),
}

impl Chord {
    /// Get chord name in musical notation (e.g., "C", "F#", "Am", "D#m")
    ///
    /// # Example
    ///
    /// ```
    /// use chordal_dsp::analysis::result::Chord;
    ///
    /// assert_eq!(Chord::Major(0).name(), "C");
    /// assert_eq!(Chord::Major(6).name(), "F#");
    /// assert_eq!(Chord::Minor(9).name(), "Am");
    /// assert_eq!(Chord::Minor(1).name(), "C#m");
    /// ```
    pub fn name(&self) -> String {
        match self {
            Chord::Major(i) => NOTE_NAMES[*i as usize % 12].to_string(),
            Chord::Minor(i) => format!("{}m", NOTE_NAMES[*i as usize % 12]),
        }
    }

    /// Root pitch class (0 = C, ..., 11 = B)
    pub fn root(&self) -> u32 {
        match self {
            Chord::Major(i) | Chord::Minor(i) => *i % 12,
        }
    }

    /// Index of this chord in the 24-row template bank
    ///
    /// The bank interleaves qualities per pitch class: index 2i is the major
    /// triad on pitch class i, index 2i+1 the minor triad.
    pub fn template_index(&self) -> usize {
        match self {
            Chord::Major(i) => 2 * (*i as usize % 12),
            Chord::Minor(i) => 2 * (*i as usize % 12) + 1,
        }
    }

    /// Chord for a template bank index (inverse of [`Chord::template_index`])
    ///
    /// Returns `None` if the index is outside the 24-row bank.
    pub fn from_template_index(idx: usize) -> Option<Self> {
        if idx >= 24 {
            return None;
        }
        let pc = (idx / 2) as u32;
        if idx % 2 == 0 {
            Some(Chord::Major(pc))
        } else {
            Some(Chord::Minor(pc))
        }
    }
}

/// A constant-chord time interval
///
/// Invariants maintained by the segmenter: successive intervals touch
/// (`end[i] == start[i+1]`), never overlap, and adjacent intervals never
/// carry the same chord label. Timestamps are in seconds, rounded to
/// millisecond precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordInterval {
    /// Chord label (e.g., "C", "Am")
    pub chord: String,

    /// Interval start time in seconds
    pub start: f64,

    /// Interval end time in seconds
    pub end: f64,
}

/// Full chord extraction result
#[derive(Debug, Clone)]
pub struct ChordAnalysis {
    /// Time-ordered chord intervals covering the recording
    pub intervals: Vec<ChordInterval>,

    /// Metadata about the analysis run
    pub metadata: AnalysisMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_names() {
        assert_eq!(Chord::Major(0).name(), "C");
        assert_eq!(Chord::Minor(0).name(), "Cm");
        assert_eq!(Chord::Major(10).name(), "A#");
        assert_eq!(Chord::Minor(11).name(), "Bm");
    }

    #[test]
    fn test_template_index_round_trip() {
        for idx in 0..24 {
            let chord = Chord::from_template_index(idx).unwrap();
            assert_eq!(chord.template_index(), idx);
        }
        assert_eq!(Chord::from_template_index(24), None);
    }

    #[test]
    fn test_template_index_interleaving() {
        assert_eq!(Chord::from_template_index(0), Some(Chord::Major(0)));
        assert_eq!(Chord::from_template_index(1), Some(Chord::Minor(0)));
        assert_eq!(Chord::from_template_index(2), Some(Chord::Major(1)));
        assert_eq!(Chord::from_template_index(23), Some(Chord::Minor(11)));
    }

    #[test]
    fn test_interval_json_field_names() {
        let interval = ChordInterval {
            chord: "Am".to_string(),
            start: 0.2,
            end: 0.3,
        };
        let json = serde_json::to_string(&interval).unwrap();
        assert_eq!(json, r#"{"chord":"Am","start":0.2,"end":0.3}"#);
    }
}
