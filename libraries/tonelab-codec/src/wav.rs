//! Canonical RIFF/WAVE serialization
//!
//! Writes the fixed 44-byte little-endian header followed by interleaved
//! signed 16-bit samples. The layout is the minimal canonical form: a
//! 16-byte fmt chunk and a single data chunk, nothing else. The decoder
//! mirrors exactly that layout and rejects anything else.

use crate::error::{CodecError, Result};
use tonelab_core::SampleBuffer;

/// RIFF format tag for linear PCM
pub const PCM_FORMAT_TAG: u16 = 1;

/// Fixed output bit depth
pub const BITS_PER_SAMPLE: u16 = 16;

/// Canonical header length in bytes
pub const HEADER_LEN: usize = 44;

/// Serialize a buffer as a 16-bit PCM WAV byte stream
///
/// Each sample is clamped to [-1.0, 1.0], scaled by 32767, and floored to
/// a signed 16-bit integer, so full scale maps to ±32767 and out-of-range
/// values are silently corrected rather than wrapped.
pub fn encode_wav(buffer: &SampleBuffer) -> Vec<u8> {
    let channels = buffer.channel_count() as u16;
    let sample_rate = buffer.sample_rate();
    let block_align = channels * (BITS_PER_SAMPLE / 8);
    let byte_rate = sample_rate * u32::from(block_align);
    let data_size = (buffer.frames() * block_align as usize) as u32;
    let chunk_size = (HEADER_LEN as u32 - 8) + data_size;

    let mut out = Vec::with_capacity(HEADER_LEN + data_size as usize);

    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&chunk_size.to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16_u32.to_le_bytes());
    out.extend_from_slice(&PCM_FORMAT_TAG.to_le_bytes());
    out.extend_from_slice(&channels.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());

    for &sample in &buffer.to_interleaved() {
        out.extend_from_slice(&quantize(sample).to_le_bytes());
    }

    out
}

/// Deserialize a canonical 16-bit PCM WAV byte stream
///
/// Mirror of [`encode_wav`]: expects exactly the 44-byte canonical header.
///
/// # Errors
/// Returns an error if the header is truncated or malformed, the format is
/// not 16-bit linear PCM, or the data section is shorter than declared
pub fn decode_wav(bytes: &[u8]) -> Result<SampleBuffer> {
    if bytes.len() < HEADER_LEN {
        return Err(CodecError::TruncatedHeader {
            actual: bytes.len(),
        });
    }

    expect_marker(bytes, 0, b"RIFF", "RIFF")?;
    expect_marker(bytes, 8, b"WAVE", "WAVE")?;
    expect_marker(bytes, 12, b"fmt ", "fmt ")?;
    expect_marker(bytes, 36, b"data", "data")?;

    let fmt_size = read_u32(bytes, 16);
    if fmt_size != 16 {
        return Err(CodecError::MalformedFmtChunk(fmt_size));
    }

    let format_tag = read_u16(bytes, 20);
    if format_tag != PCM_FORMAT_TAG {
        return Err(CodecError::UnsupportedFormatTag(format_tag));
    }

    let channels = read_u16(bytes, 22) as usize;
    let sample_rate = read_u32(bytes, 24);

    let bits_per_sample = read_u16(bytes, 34);
    if bits_per_sample != BITS_PER_SAMPLE {
        return Err(CodecError::UnsupportedBitDepth(bits_per_sample));
    }

    let declared = read_u32(bytes, 40) as usize;
    let data = &bytes[HEADER_LEN..];
    if data.len() < declared {
        return Err(CodecError::TruncatedData {
            declared,
            actual: data.len(),
        });
    }

    let samples: Vec<f32> = data[..declared]
        .chunks_exact(2)
        .map(|pair| f32::from(i16::from_le_bytes([pair[0], pair[1]])) / 32767.0)
        .collect();

    Ok(SampleBuffer::from_interleaved(
        &samples,
        channels,
        sample_rate,
    )?)
}

fn quantize(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * 32767.0).floor() as i16
}

fn expect_marker(
    bytes: &[u8],
    offset: usize,
    marker: &[u8; 4],
    chunk: &'static str,
) -> Result<()> {
    if &bytes[offset..offset + 4] == marker {
        Ok(())
    } else {
        Err(CodecError::MissingChunk { chunk })
    }
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}
