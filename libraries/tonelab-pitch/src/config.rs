//! Pitch shift configuration

use serde::{Deserialize, Serialize};

/// Settings for a pitch shift, consumed from the surrounding application
///
/// `formant_correction` is reserved surface: it is accepted and persisted
/// but no formant processing is implemented yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PitchShiftConfig {
    /// Shift amount in semitones, typically in [-24, 24]
    pub semitones: i32,

    /// Keep the original duration (overlap-add) instead of resampling
    pub preserve_tempo: bool,

    /// Reserved, currently ignored
    #[serde(default)]
    pub formant_correction: bool,
}

impl PitchShiftConfig {
    /// Configuration for a plain resampling shift
    pub fn new(semitones: i32) -> Self {
        Self {
            semitones,
            preserve_tempo: false,
            formant_correction: false,
        }
    }

    /// Toggle tempo preservation
    #[must_use]
    pub fn with_preserve_tempo(mut self, preserve_tempo: bool) -> Self {
        self.preserve_tempo = preserve_tempo;
        self
    }

    /// Frequency ratio for the configured shift: `2^(semitones/12)`
    pub fn pitch_ratio(&self) -> f64 {
        2.0_f64.powf(f64::from(self.semitones) / 12.0)
    }
}
