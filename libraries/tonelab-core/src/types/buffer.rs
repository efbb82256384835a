/// Sample buffer type shared by every processing stage
use crate::error::{CoreError, Result};

/// In-memory block of decoded floating-point audio
///
/// Channel data is planar: one `Vec<f32>` per channel, samples nominally in
/// the range [-1.0, 1.0] (not enforced at construction). Every channel holds
/// the same number of frames; the invariant is validated once here so the
/// processing stages never re-check it.
///
/// Buffers are immutable once produced. Transforms allocate a new buffer
/// rather than mutating their input, and ownership passes stage to stage.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    /// Per-channel sample data, all channels the same length
    channels: Vec<Vec<f32>>,
    /// Samples per second per channel
    sample_rate: u32,
}

impl SampleBuffer {
    /// Create a buffer from planar channel data
    ///
    /// # Errors
    /// Returns an error if there are no channels, channel lengths differ,
    /// or the sample rate is zero
    pub fn new(channels: Vec<Vec<f32>>, sample_rate: u32) -> Result<Self> {
        if sample_rate == 0 {
            return Err(CoreError::InvalidSampleRate(sample_rate));
        }
        let expected = match channels.first() {
            Some(first) => first.len(),
            None => return Err(CoreError::EmptyChannels),
        };
        for (channel, data) in channels.iter().enumerate().skip(1) {
            if data.len() != expected {
                return Err(CoreError::ChannelLengthMismatch {
                    channel,
                    expected,
                    actual: data.len(),
                });
            }
        }
        Ok(Self {
            channels,
            sample_rate,
        })
    }

    /// Create a buffer from interleaved samples (L R L R ... for stereo)
    ///
    /// This is the format external decoders and device sinks speak.
    ///
    /// # Errors
    /// Returns an error if `channel_count` is zero, the sample count is not
    /// divisible by `channel_count`, or the sample rate is zero
    pub fn from_interleaved(
        samples: &[f32],
        channel_count: usize,
        sample_rate: u32,
    ) -> Result<Self> {
        if channel_count == 0 {
            return Err(CoreError::EmptyChannels);
        }
        if samples.len() % channel_count != 0 {
            return Err(CoreError::InterleaveMismatch {
                samples: samples.len(),
                channels: channel_count,
            });
        }
        let frames = samples.len() / channel_count;
        let mut channels = vec![Vec::with_capacity(frames); channel_count];
        for frame in samples.chunks_exact(channel_count) {
            for (data, &sample) in channels.iter_mut().zip(frame) {
                data.push(sample);
            }
        }
        Self::new(channels, sample_rate)
    }

    /// Interleave the channel data frame by frame
    pub fn to_interleaved(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.frames() * self.channel_count());
        for frame in 0..self.frames() {
            for data in &self.channels {
                out.push(data[frame]);
            }
        }
        out
    }

    /// Number of channels
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Number of frames (samples per channel)
    pub fn frames(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / f64::from(self.sample_rate)
    }

    /// Check whether the buffer holds zero frames
    pub fn is_empty(&self) -> bool {
        self.frames() == 0
    }

    /// All channel data
    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    /// Apply a transform to every channel, producing a new buffer at the
    /// same sample rate
    ///
    /// The same function maps each channel, so equal input lengths yield
    /// equal output lengths and the shape invariant is preserved without
    /// re-validation. Transforms built on this never mutate their input.
    pub fn map_channels<F>(&self, mut f: F) -> SampleBuffer
    where
        F: FnMut(&[f32]) -> Vec<f32>,
    {
        let channels: Vec<Vec<f32>> = self.channels.iter().map(|data| f(data)).collect();
        debug_assert!(channels.windows(2).all(|pair| pair[0].len() == pair[1].len()));
        SampleBuffer {
            channels,
            sample_rate: self.sample_rate,
        }
    }

    /// A single channel's samples, or `None` if the index is out of range
    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }
}
