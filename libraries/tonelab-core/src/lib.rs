//! Tonelab Core
//!
//! Shared types, boundary traits, and error handling for the Tonelab audio
//! processing core.
//!
//! This crate defines:
//! - **`SampleBuffer`**: the in-memory representation of decoded audio that
//!   every processing stage operates on
//! - **Boundary Traits**: `AudioDecoder` and `AudioSink`, the only points
//!   where the core touches the outside world
//! - **Error Handling**: unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tonelab_core::SampleBuffer;
//!
//! // A half-second of silence, stereo at 44.1 kHz
//! let buffer = SampleBuffer::new(vec![vec![0.0; 22_050]; 2], 44_100).unwrap();
//! assert_eq!(buffer.frames(), 22_050);
//! assert!((buffer.duration_secs() - 0.5).abs() < 1e-9);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use traits::{AudioDecoder, AudioSink, ProcessingContext};
pub use types::SampleBuffer;
