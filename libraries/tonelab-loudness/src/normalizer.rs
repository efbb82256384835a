//! Peak normalization with soft limiting
//!
//! Scales each channel so its peak lands on the configured target level,
//! then soft-limits samples that cross the limiter ceiling. Gain is computed
//! per channel independently, so an imbalanced stereo file normalizes each
//! side to the same target peak.

use crate::{NormalizationConfig, NormalizationPreset, SOFT_LIMIT_CEILING, SOFT_LIMIT_RATIO};
use tonelab_core::SampleBuffer;
use tracing::debug;

/// Peak-based normalizer
///
/// Produces a new buffer with identical shape; only sample values change.
/// Always succeeds numerically; degenerate input (a silent channel) gets
/// unity gain rather than an error.
///
/// # Example
///
/// ```
/// use tonelab_core::SampleBuffer;
/// use tonelab_loudness::PeakNormalizer;
///
/// let buffer = SampleBuffer::new(vec![vec![0.3, -0.3, 0.15]], 44_100).unwrap();
/// let normalized = PeakNormalizer::with_target_db(-12.0).process(&buffer);
///
/// // Peak moved to 10^(-12/20) ~= 0.2512
/// let peak = normalized.channel(0).unwrap().iter().fold(0.0f32, |a, s| a.max(s.abs()));
/// assert!((peak - 0.2512).abs() < 0.001);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PeakNormalizer {
    config: NormalizationConfig,
}

impl PeakNormalizer {
    /// Create a normalizer from a full configuration
    pub fn new(config: NormalizationConfig) -> Self {
        Self { config }
    }

    /// Create a normalizer targeting a raw dB level
    pub fn with_target_db(target_level_db: f64) -> Self {
        Self::new(NormalizationConfig::with_target_db(target_level_db))
    }

    /// Create a normalizer from a named preset
    pub fn with_preset(preset: NormalizationPreset) -> Self {
        Self::new(NormalizationConfig::from_preset(preset))
    }

    /// The active configuration
    pub fn config(&self) -> &NormalizationConfig {
        &self.config
    }

    /// Normalize a buffer, returning a new buffer of identical shape
    ///
    /// Per channel: recompute that channel's peak, scale it onto the target
    /// level, and soft-limit anything the gain pushed past the ceiling.
    pub fn process(&self, buffer: &SampleBuffer) -> SampleBuffer {
        let target_db = self.config.effective_target_db();
        let target_linear = 10.0_f32.powf(target_db as f32 / 20.0);

        debug!(
            "normalizing {} channels x {} frames to {:.1} dB target",
            buffer.channel_count(),
            buffer.frames(),
            target_db
        );

        buffer.map_channels(|data| normalize_channel(data, target_linear))
    }
}

fn normalize_channel(samples: &[f32], target_linear: f32) -> Vec<f32> {
    let peak = samples.iter().fold(0.0_f32, |acc, s| acc.max(s.abs()));
    let gain = if peak > 0.0 { target_linear / peak } else { 1.0 };
    samples.iter().map(|&s| soft_limit(s * gain)).collect()
}

/// Compress magnitudes past the ceiling toward it instead of hard-clipping
///
/// The curve maps (0.95, 1.0] into a narrow band just above 0.95. It is
/// only well-behaved for magnitudes near the ceiling; inputs far above it
/// (a positive-dB target) can still exceed 1.0, and no further clamp is
/// applied here. The container codec clamps before quantizing.
fn soft_limit(sample: f32) -> f32 {
    let magnitude = sample.abs();
    if magnitude > SOFT_LIMIT_CEILING {
        sample.signum() * (SOFT_LIMIT_CEILING - (SOFT_LIMIT_CEILING - magnitude) * SOFT_LIMIT_RATIO)
    } else {
        sample
    }
}
