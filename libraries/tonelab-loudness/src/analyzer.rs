//! Peak/RMS level analysis
//!
//! Measures loudness statistics over a sample buffer in a single linear
//! pass: sample peak, RMS level, their dB equivalents, dynamic range, and a
//! clipping heuristic. The analysis drives the gain suggestion used by the
//! normalizer.
//!
//! Only the first channel is inspected. This matches the product's display
//! behavior; the normalizer computes gain per channel independently.

use crate::{CLIP_DETECT_FRACTION, CLIP_SAMPLE_THRESHOLD};
use std::fmt;
use tonelab_core::SampleBuffer;
use tracing::debug;

/// Loudness statistics for an audio buffer
///
/// A pure function of (buffer, target level); recomputable at any time and
/// never mutated after creation. Silent input yields `-inf` dB levels; use
/// [`LevelAnalysis::is_silent`] before formatting raw numbers for display.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelAnalysis {
    /// Largest absolute sample value on the analyzed channel
    pub peak: f32,

    /// Root-mean-square of the analyzed channel
    pub rms: f32,

    /// Peak level in dBFS (`-inf` for silent input)
    pub peak_db: f64,

    /// RMS level in dBFS (`-inf` for silent input)
    pub rms_db: f64,

    /// Difference between peak and RMS level in dB (0 for silent input)
    pub dynamic_range_db: f64,

    /// True if more than 0.1% of samples sit at or above the clip threshold
    pub clipping_detected: bool,

    /// Gain in dB that would move the peak to the target level
    /// (0 for silent input, where the normalizer applies unity gain)
    pub suggested_gain_db: f64,
}

impl LevelAnalysis {
    /// Whether the analyzed channel contained no signal
    pub fn is_silent(&self) -> bool {
        self.peak == 0.0
    }
}

impl fmt::Display for LevelAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Peak: {:.1} dB, RMS: {:.1} dB, Range: {:.1} dB, Clipping: {}",
            self.peak_db,
            self.rms_db,
            self.dynamic_range_db,
            if self.clipping_detected { "yes" } else { "no" }
        )
    }
}

/// Level analyzer
///
/// Holds the target level the gain suggestion is computed against.
///
/// # Example
///
/// ```
/// use tonelab_core::SampleBuffer;
/// use tonelab_loudness::LevelAnalyzer;
///
/// let buffer = SampleBuffer::new(vec![vec![0.5, -0.5, 0.25, -0.25]], 44_100).unwrap();
/// let analysis = LevelAnalyzer::new(-12.0).analyze(&buffer);
///
/// assert!((analysis.peak - 0.5).abs() < 1e-6);
/// assert!(!analysis.clipping_detected);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LevelAnalyzer {
    /// Target level in dBFS for the gain suggestion
    target_level_db: f64,
}

impl LevelAnalyzer {
    /// Create an analyzer with the given target level in dBFS
    pub fn new(target_level_db: f64) -> Self {
        Self { target_level_db }
    }

    /// The target level the gain suggestion is computed against
    pub fn target_level_db(&self) -> f64 {
        self.target_level_db
    }

    /// Analyze a buffer's first channel
    ///
    /// Single pass tracking maximum absolute value, running sum of squares,
    /// and the count of samples at or above the clip threshold. A zero-frame
    /// buffer returns neutral results without dividing by zero.
    pub fn analyze(&self, buffer: &SampleBuffer) -> LevelAnalysis {
        let samples = buffer.channel(0).unwrap_or(&[]);
        let frames = samples.len();

        let mut peak = 0.0_f32;
        let mut sum_squares = 0.0_f64;
        let mut clip_count = 0_usize;

        for &sample in samples {
            let magnitude = sample.abs();
            if magnitude > peak {
                peak = magnitude;
            }
            sum_squares += f64::from(sample) * f64::from(sample);
            if magnitude >= CLIP_SAMPLE_THRESHOLD {
                clip_count += 1;
            }
        }

        let rms = if frames == 0 {
            0.0
        } else {
            (sum_squares / frames as f64).sqrt() as f32
        };

        let peak_db = db_from_linear(f64::from(peak));
        let rms_db = db_from_linear(f64::from(rms));

        // Silence would make these -inf - -inf (NaN) and target - -inf (+inf);
        // neutral values keep display logic and the normalizer well-defined.
        let (dynamic_range_db, suggested_gain_db) = if peak > 0.0 {
            (peak_db - rms_db, self.target_level_db - peak_db)
        } else {
            (0.0, 0.0)
        };

        let clipping_detected =
            frames > 0 && (clip_count as f64 / frames as f64) > CLIP_DETECT_FRACTION;

        debug!(
            "analyzed {} frames: peak {:.4}, rms {:.4}, clipped {}",
            frames, peak, rms, clip_count
        );

        LevelAnalysis {
            peak,
            rms,
            peak_db,
            rms_db,
            dynamic_range_db,
            clipping_detected,
            suggested_gain_db,
        }
    }
}

/// Convert a linear amplitude to dBFS, with `-inf` for zero
pub(crate) fn db_from_linear(value: f64) -> f64 {
    if value > 0.0 {
        20.0 * value.log10()
    } else {
        f64::NEG_INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono(samples: Vec<f32>) -> SampleBuffer {
        SampleBuffer::new(vec![samples], 44_100).unwrap()
    }

    #[test]
    fn test_constant_signal_levels() {
        // Constant 0.5 signal: peak == rms == 0.5, zero dynamic range
        let analysis = LevelAnalyzer::new(-12.0).analyze(&mono(vec![0.5; 1000]));

        assert!((analysis.peak - 0.5).abs() < 1e-6);
        assert!((analysis.rms - 0.5).abs() < 1e-6);
        assert!((analysis.peak_db - (-6.0206)).abs() < 0.001);
        assert!(analysis.dynamic_range_db.abs() < 0.001);
    }

    #[test]
    fn test_sine_dynamic_range() {
        // A sine's RMS is peak / sqrt(2), so its dynamic range is ~3.01 dB
        let samples: Vec<f32> = (0..44_100)
            .map(|i| {
                let t = i as f32 / 44_100.0;
                0.8 * (2.0 * std::f32::consts::PI * 440.0 * t).sin()
            })
            .collect();
        let analysis = LevelAnalyzer::new(-12.0).analyze(&mono(samples));

        assert!(
            (analysis.dynamic_range_db - 3.01).abs() < 0.05,
            "Expected ~3.01 dB dynamic range, got {:.3}",
            analysis.dynamic_range_db
        );
    }

    #[test]
    fn test_suggested_gain() {
        // Peak 0.5 (-6.02 dB), target -12 dB: gain should be -5.98 dB
        let analysis = LevelAnalyzer::new(-12.0).analyze(&mono(vec![0.5; 100]));
        assert!((analysis.suggested_gain_db - (-5.9794)).abs() < 0.001);
    }

    #[test]
    fn test_clipping_detection_monotonicity() {
        // 1% of samples at full scale: well over the 0.1% threshold
        let mut samples = vec![0.1_f32; 1000];
        for s in samples.iter_mut().take(10) {
            *s = 1.0;
        }
        assert!(LevelAnalyzer::new(-12.0).analyze(&mono(samples)).clipping_detected);

        // No samples near full scale
        let clean = LevelAnalyzer::new(-12.0).analyze(&mono(vec![0.5; 1000]));
        assert!(!clean.clipping_detected);
    }

    #[test]
    fn test_clipping_threshold_is_exclusive() {
        // Exactly 0.1% clipped samples must NOT trigger detection
        let mut samples = vec![0.1_f32; 1000];
        samples[0] = 0.99;
        let analysis = LevelAnalyzer::new(-12.0).analyze(&mono(samples));
        assert!(!analysis.clipping_detected);
    }

    #[test]
    fn test_empty_buffer_is_neutral() {
        let analysis = LevelAnalyzer::new(-12.0).analyze(&mono(vec![]));

        assert_eq!(analysis.peak, 0.0);
        assert_eq!(analysis.rms, 0.0);
        assert!(analysis.peak_db.is_infinite() && analysis.peak_db < 0.0);
        assert!(analysis.rms_db.is_infinite() && analysis.rms_db < 0.0);
        assert_eq!(analysis.dynamic_range_db, 0.0);
        assert_eq!(analysis.suggested_gain_db, 0.0);
        assert!(!analysis.clipping_detected);
        assert!(analysis.is_silent());

        // Nothing NaN-shaped escapes
        assert!(!analysis.dynamic_range_db.is_nan());
        assert!(!analysis.suggested_gain_db.is_nan());
    }

    #[test]
    fn test_silent_buffer_is_neutral() {
        let analysis = LevelAnalyzer::new(-12.0).analyze(&mono(vec![0.0; 1000]));
        assert!(analysis.is_silent());
        assert_eq!(analysis.suggested_gain_db, 0.0);
    }

    #[test]
    fn test_only_first_channel_analyzed() {
        // Loud second channel must not affect the result
        let buffer =
            SampleBuffer::new(vec![vec![0.1; 100], vec![0.9; 100]], 44_100).unwrap();
        let analysis = LevelAnalyzer::new(-12.0).analyze(&buffer);
        assert!((analysis.peak - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_display_renders_silence() {
        let analysis = LevelAnalyzer::new(-12.0).analyze(&mono(vec![]));
        let text = format!("{}", analysis);
        assert!(text.contains("-inf"));
        assert!(text.contains("Clipping: no"));
    }
}
