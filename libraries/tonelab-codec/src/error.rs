/// Error types for container parsing
use thiserror::Error;

/// Result type alias using `CodecError`
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors raised while decoding a PCM container
///
/// Encoding is infallible: the buffer shape is validated at construction
/// and out-of-range samples are clamped before quantization.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Byte stream shorter than the 44-byte canonical header
    #[error("Container too short: {actual} bytes (header needs 44)")]
    TruncatedHeader {
        /// Bytes actually present
        actual: usize,
    },

    /// A required chunk marker was not where the canonical layout puts it
    #[error("Missing {chunk:?} chunk marker")]
    MissingChunk {
        /// The expected four-byte marker
        chunk: &'static str,
    },

    /// The fmt chunk is not the 16-byte PCM form
    #[error("Malformed fmt chunk: declared size {0}, expected 16")]
    MalformedFmtChunk(u32),

    /// Only linear PCM (tag 1) is supported
    #[error("Unsupported format tag: {0} (only PCM = 1)")]
    UnsupportedFormatTag(u16),

    /// Only 16-bit samples are supported
    #[error("Unsupported bit depth: {0} (only 16)")]
    UnsupportedBitDepth(u16),

    /// The data section is shorter than its declared size
    #[error("Data section truncated: header declares {declared} bytes, {actual} present")]
    TruncatedData {
        /// Size the header claims
        declared: usize,
        /// Bytes actually present after the header
        actual: usize,
    },

    /// Decoded shape failed buffer validation
    #[error(transparent)]
    Core(#[from] tonelab_core::CoreError),
}
