//! Normalization targets and presets
//!
//! Named profiles map to fixed target levels so hosts can persist a profile
//! choice instead of a raw dB number.

use serde::{Deserialize, Serialize};

/// Named normalization profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationPreset {
    /// General music content (-12 dB)
    #[default]
    Music,
    /// Spoken word (-16 dB)
    Podcast,
    /// EBU broadcast delivery (-23 dB)
    Broadcast,
    /// Mastering reference (-14 dB)
    Mastering,
    /// Streaming platform loudness (-14 dB)
    Streaming,
}

impl NormalizationPreset {
    /// The target level in dBFS this preset normalizes to
    pub fn target_level_db(&self) -> f64 {
        match self {
            Self::Music => -12.0,
            Self::Podcast => -16.0,
            Self::Broadcast => -23.0,
            Self::Mastering | Self::Streaming => -14.0,
        }
    }

    /// Parse from string (for settings persistence)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "music" => Some(Self::Music),
            "podcast" | "voice" => Some(Self::Podcast),
            "broadcast" => Some(Self::Broadcast),
            "mastering" => Some(Self::Mastering),
            "streaming" => Some(Self::Streaming),
            _ => None,
        }
    }

    /// Convert to string for settings persistence
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Music => "music",
            Self::Podcast => "podcast",
            Self::Broadcast => "broadcast",
            Self::Mastering => "mastering",
            Self::Streaming => "streaming",
        }
    }
}

/// Normalization settings consumed from the surrounding application
///
/// When `preset` is set it wins over `target_level_db`; otherwise the raw
/// target is used as-is. Typical targets sit in [-30, -6] dB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizationConfig {
    /// Target peak level in dBFS
    pub target_level_db: f64,

    /// Optional named profile overriding the raw target
    pub preset: Option<NormalizationPreset>,
}

impl NormalizationConfig {
    /// Configuration from a named preset
    pub fn from_preset(preset: NormalizationPreset) -> Self {
        Self {
            target_level_db: preset.target_level_db(),
            preset: Some(preset),
        }
    }

    /// Configuration from a raw dB target
    pub fn with_target_db(target_level_db: f64) -> Self {
        Self {
            target_level_db,
            preset: None,
        }
    }

    /// The target actually applied: the preset's level when one is set
    pub fn effective_target_db(&self) -> f64 {
        self.preset
            .map_or(self.target_level_db, |p| p.target_level_db())
    }
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self::from_preset(NormalizationPreset::default())
    }
}
