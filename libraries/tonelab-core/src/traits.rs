/// Core traits for Tonelab
use crate::error::Result;
use crate::types::SampleBuffer;
use std::path::Path;

/// Audio decoder trait
///
/// Implementers turn compressed audio files into `SampleBuffer`s. The core
/// never parses compressed formats itself; the host supplies a decoder
/// behind this boundary.
pub trait AudioDecoder: Send {
    /// Decode an audio file from the given path
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or decoded
    fn decode(&mut self, path: &Path) -> Result<SampleBuffer>;

    /// Check if the decoder supports the given file format
    fn supports_format(&self, path: &Path) -> bool;
}

/// Audio sink trait
///
/// Implementers consume encoded container bytes: a download writer, a
/// playback device feed, or anything else the host wires up.
pub trait AudioSink: Send {
    /// Consume an encoded byte stream
    ///
    /// # Errors
    /// Returns an error if the sink cannot accept the data
    fn consume(&mut self, data: &[u8]) -> Result<()>;
}

/// Caller-owned handle bundling the external collaborators a pipeline needs
///
/// Hosts construct one per processing session and pass it explicitly into
/// their orchestration. Device and decoder state is never held in
/// process-wide globals.
pub struct ProcessingContext {
    decoder: Box<dyn AudioDecoder>,
    sink: Box<dyn AudioSink>,
}

impl ProcessingContext {
    /// Create a context from a decoder and a sink
    pub fn new(decoder: Box<dyn AudioDecoder>, sink: Box<dyn AudioSink>) -> Self {
        Self { decoder, sink }
    }

    /// Decode an input file through the attached decoder
    ///
    /// # Errors
    /// Propagates decoder failures
    pub fn decode(&mut self, path: &Path) -> Result<SampleBuffer> {
        self.decoder.decode(path)
    }

    /// Check whether the attached decoder supports the given file
    pub fn supports_format(&self, path: &Path) -> bool {
        self.decoder.supports_format(path)
    }

    /// Hand an encoded byte stream to the attached sink
    ///
    /// # Errors
    /// Propagates sink failures
    pub fn deliver(&mut self, data: &[u8]) -> Result<()> {
        self.sink.consume(data)
    }
}
