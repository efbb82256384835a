//! PCM container codec for Tonelab
//!
//! Serializes a [`tonelab_core::SampleBuffer`] into the canonical
//! uncompressed RIFF/WAVE layout (16-bit linear PCM, little-endian) for the
//! host's save/download or playback sink, and deserializes the same layout
//! back into a buffer.
//!
//! # Example
//!
//! ```
//! use tonelab_codec::{decode_wav, encode_wav};
//! use tonelab_core::SampleBuffer;
//!
//! let buffer = SampleBuffer::new(vec![vec![0.0, 0.5, -0.5, 1.0]], 8_000).unwrap();
//! let bytes = encode_wav(&buffer);
//! assert_eq!(bytes.len(), 44 + 8);
//!
//! let round_tripped = decode_wav(&bytes).unwrap();
//! assert_eq!(round_tripped.frames(), 4);
//! ```

#![deny(unsafe_code)]

mod error;
mod wav;

pub use error::{CodecError, Result};
pub use wav::{decode_wav, encode_wav, BITS_PER_SAMPLE, HEADER_LEN, PCM_FORMAT_TAG};
