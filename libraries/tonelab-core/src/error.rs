/// Core error types for Tonelab
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Tonelab
///
/// Buffer-shape violations are caught once at construction so the DSP
/// stages can assume a well-formed buffer and stay infallible.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Buffer was constructed with no channels
    #[error("Buffer has no channels")]
    EmptyChannels,

    /// Channel data lengths differ
    #[error("Channel {channel} has {actual} frames, expected {expected}")]
    ChannelLengthMismatch {
        /// Index of the offending channel
        channel: usize,
        /// Frame count of channel 0
        expected: usize,
        /// Frame count actually found
        actual: usize,
    },

    /// Sample rate must be positive
    #[error("Invalid sample rate: {0} Hz (must be > 0)")]
    InvalidSampleRate(u32),

    /// Interleaved sample count does not divide evenly into channels
    #[error("Sample count {samples} is not divisible by channel count {channels}")]
    InterleaveMismatch {
        /// Total interleaved sample count
        samples: usize,
        /// Requested channel count
        channels: usize,
    },

    /// External decoder failure
    #[error("Decode error: {0}")]
    Decode(String),

    /// External sink failure
    #[error("Sink error: {0}")]
    Sink(String),

    /// I/O errors from boundary implementations
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a sink error
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }
}
