//! Triad chord templates
//!
//! Defines the 24 reference pitch-class patterns (12 major + 12 minor triads)
//! used for frame classification. Each template is a 12-element vector with
//! weight at the chord tones only, L2-normalized to unit length.

use crate::analysis::result::Chord;

/// Semitone offsets of a major triad from its root (root, major third, fifth)
const MAJOR_OFFSETS: [usize; 3] = [0, 4, 7];

/// Semitone offsets of a minor triad from its root (root, minor third, fifth)
const MINOR_OFFSETS: [usize; 3] = [0, 3, 7];

/// Template bank for all 24 triads
///
/// Row ordering is fixed and deterministic: pitch classes 0..11 in order,
/// major before minor within each pitch class (C, Cm, C#, C#m, ..., B, Bm).
/// Built once at startup, immutable afterwards; pass it by reference into the
/// classifier rather than keeping it as global state.
#[derive(Debug, Clone)]
pub struct ChordTemplates {
    templates: Vec<Vec<f32>>,
    chords: Vec<Chord>,
}

impl ChordTemplates {
    /// Number of templates in the bank
    pub const NUM_TEMPLATES: usize = 24;

    /// Build the 24-template bank
    ///
    /// Pure and side-effect-free; no error conditions.
    pub fn new() -> Self {
        let mut templates = Vec::with_capacity(Self::NUM_TEMPLATES);
        let mut chords = Vec::with_capacity(Self::NUM_TEMPLATES);

        for root in 0..12u32 {
            templates.push(build_template(root as usize, &MAJOR_OFFSETS));
            chords.push(Chord::Major(root));

            templates.push(build_template(root as usize, &MINOR_OFFSETS));
            chords.push(Chord::Minor(root));
        }

        Self { templates, chords }
    }

    /// Template vector at bank index `idx` (12 elements, unit L2 norm)
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 24`.
    pub fn template(&self, idx: usize) -> &[f32] {
        &self.templates[idx]
    }

    /// Chord at bank index `idx`
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 24`.
    pub fn chord(&self, idx: usize) -> Chord {
        self.chords[idx]
    }

    /// Chord label at bank index `idx` (e.g., "C", "Am")
    pub fn label(&self, idx: usize) -> String {
        self.chords[idx].name()
    }

    /// Iterate over (bank index, template vector) pairs in bank order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[f32])> {
        self.templates.iter().enumerate().map(|(i, t)| (i, t.as_slice()))
    }

    /// Number of templates (always 24)
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the bank is empty (never, for a constructed bank)
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for ChordTemplates {
    fn default() -> Self {
        Self::new()
    }
}

/// Build one unit-norm triad template from root and semitone offsets
fn build_template(root: usize, offsets: &[usize; 3]) -> Vec<f32> {
    let mut template = vec![0.0f32; 12];
    for &offset in offsets {
        template[(root + offset) % 12] = 1.0;
    }
    // Three equal unit weights, so the L2 norm is sqrt(3)
    let norm = 3.0f32.sqrt();
    for x in template.iter_mut() {
        *x /= norm;
    }
    template
}
