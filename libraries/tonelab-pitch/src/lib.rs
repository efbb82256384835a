//! Pitch shifting for Tonelab
//!
//! Two algorithms behind one entry point, selected by
//! [`PitchShiftConfig::preserve_tempo`]:
//!
//! - **Resampling** (`preserve_tempo == false`): linear-interpolation
//!   resampling; pitch and duration change together, so +12 semitones
//!   halves the frame count.
//! - **Overlap-add** (`preserve_tempo == true`): Hann-windowed frame
//!   remapping at a fixed hop that keeps the original frame count. This is
//!   an approximation without phase correction, not a phase vocoder;
//!   acceptable for preview-quality output.
//!
//! Both paths clamp all index arithmetic, never touch the input buffer, and
//! always produce a buffer at the original sample rate.
//!
//! # Example
//!
//! ```
//! use tonelab_core::SampleBuffer;
//! use tonelab_pitch::{shift_pitch, PitchShiftConfig};
//!
//! let buffer = SampleBuffer::new(vec![vec![0.0; 44_100]], 44_100).unwrap();
//!
//! // Up an octave by resampling: half the frames
//! let shifted = shift_pitch(&buffer, &PitchShiftConfig::new(12));
//! assert_eq!(shifted.frames(), 22_050);
//!
//! // Same shift with tempo preserved: frame count unchanged
//! let config = PitchShiftConfig::new(12).with_preserve_tempo(true);
//! assert_eq!(shift_pitch(&buffer, &config).frames(), 44_100);
//! ```

#![deny(unsafe_code)]

mod config;
mod overlap;
mod resample;

pub use config::PitchShiftConfig;
pub use overlap::{FRAME_SIZE, HOP_SIZE};

use tonelab_core::SampleBuffer;
use tracing::debug;

/// Shift a buffer's pitch according to the configuration
///
/// Applies the configured algorithm to each channel independently. Always
/// produces a buffer; there are no error conditions. The reserved
/// `formant_correction` flag is ignored.
pub fn shift_pitch(buffer: &SampleBuffer, config: &PitchShiftConfig) -> SampleBuffer {
    let ratio = config.pitch_ratio();
    debug!(
        "shifting {} semitones (ratio {:.4}, preserve_tempo: {})",
        config.semitones, ratio, config.preserve_tempo
    );

    if config.preserve_tempo {
        buffer.map_channels(|data| overlap::overlap_add_channel(data, ratio))
    } else {
        buffer.map_channels(|data| resample::resample_channel(data, ratio))
    }
}
