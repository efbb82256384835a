//! Loudness analysis and normalization for Tonelab
//!
//! This crate provides:
//! - Peak/RMS level measurement with clipping detection
//! - Peak-based gain normalization toward a dB target, with soft limiting
//! - Named normalization presets (music, podcast, broadcast, mastering,
//!   streaming)
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌───────────────┐
//! │ SampleBuffer │ ──► │ LevelAnalyzer │ ──► │ LevelAnalysis │
//! └──────────────┘     └───────────────┘     └───────────────┘
//!        │
//!        ▼
//! ┌────────────────┐     ┌──────────────────────┐
//! │ PeakNormalizer │ ──► │ new SampleBuffer     │
//! │ (gain + limit) │     │ (peak at target dB)  │
//! └────────────────┘     └──────────────────────┘
//! ```
//!
//! Targets are peak-referenced dBFS values, not true loudness units: gain is
//! chosen so the channel peak lands on the target, which approximates a
//! LUFS-style goal for typical material.
//!
//! # Example
//!
//! ```
//! use tonelab_core::SampleBuffer;
//! use tonelab_loudness::{LevelAnalyzer, NormalizationPreset, PeakNormalizer};
//!
//! let buffer = SampleBuffer::new(vec![vec![0.3, -0.3, 0.1]], 44_100).unwrap();
//!
//! let analysis = LevelAnalyzer::new(-12.0).analyze(&buffer);
//! assert!(!analysis.clipping_detected);
//!
//! let normalized = PeakNormalizer::with_preset(NormalizationPreset::Music).process(&buffer);
//! assert_eq!(normalized.frames(), buffer.frames());
//! ```

#![deny(unsafe_code)]

mod analyzer;
mod normalizer;
mod presets;

pub use analyzer::{LevelAnalysis, LevelAnalyzer};
pub use normalizer::PeakNormalizer;
pub use presets::{NormalizationConfig, NormalizationPreset};

/// Absolute sample value treated as clipped
pub const CLIP_SAMPLE_THRESHOLD: f32 = 0.99;

/// Fraction of clipped samples above which clipping is reported (0.1%)
pub const CLIP_DETECT_FRACTION: f64 = 0.001;

/// Magnitude above which the normalizer's soft limiter engages
pub const SOFT_LIMIT_CEILING: f32 = 0.95;

/// Compression factor the soft limiter applies past the ceiling
pub const SOFT_LIMIT_RATIO: f32 = 0.1;
