// src/config/options.rs
// User-adjustable generation options (tone, length, quote count, sliders, toggles)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Models offered as choices; any other model id is still accepted
pub const MODEL_CHOICES: &[&str] = &["gemini-2.5-flash", "gemini-1.5-flash", "gemini-1.5-pro"];

/// Default model when neither a flag nor GEMINI_MODEL is given
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

pub const MIN_QUOTES: u8 = 3;
pub const MAX_QUOTES: u8 = 10;
pub const MIN_CREATIVITY: f32 = 0.1;
pub const MAX_CREATIVITY: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Matches the user's detected emotional energy
    #[default]
    Adaptive,
    Inspiring,
    Empathetic,
    Energetic,
    Calm,
    Practical,
    Philosophical,
}

impl Tone {
    pub const ALL: [Tone; 7] = [
        Tone::Adaptive,
        Tone::Inspiring,
        Tone::Empathetic,
        Tone::Energetic,
        Tone::Calm,
        Tone::Practical,
        Tone::Philosophical,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adaptive => "adaptive",
            Self::Inspiring => "inspiring",
            Self::Empathetic => "empathetic",
            Self::Energetic => "energetic",
            Self::Calm => "calm",
            Self::Practical => "practical",
            Self::Philosophical => "philosophical",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseLength {
    Concise,
    #[default]
    Detailed,
    Comprehensive,
    Extensive,
}

impl ResponseLength {
    pub const ALL: [ResponseLength; 4] = [
        ResponseLength::Concise,
        ResponseLength::Detailed,
        ResponseLength::Comprehensive,
        ResponseLength::Extensive,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == s.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Concise => "concise",
            Self::Detailed => "detailed",
            Self::Comprehensive => "comprehensive",
            Self::Extensive => "extensive",
        }
    }
}

impl fmt::Display for ResponseLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the user can tune before pressing "generate"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub model: String,
    pub tone: Tone,
    pub length: ResponseLength,
    pub num_quotes: u8,
    pub creativity: f32,
    pub detail_level: u8,
    pub personalization: u8,
    pub include_steps: bool,
    pub include_quotes_in_message: bool,
    pub include_reflection_questions: bool,
    pub include_daily_affirmation: bool,
    pub auto_speak: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            tone: Tone::default(),
            length: ResponseLength::default(),
            num_quotes: 5,
            creativity: 0.9,
            detail_level: 4,
            personalization: 5,
            include_steps: true,
            include_quotes_in_message: true,
            include_reflection_questions: true,
            include_daily_affirmation: true,
            auto_speak: false,
        }
    }
}

impl GenerationOptions {
    /// Clamp every slider into its allowed range
    pub fn normalized(mut self) -> Self {
        self.num_quotes = self.num_quotes.clamp(MIN_QUOTES, MAX_QUOTES);
        self.creativity = if self.creativity.is_finite() {
            self.creativity.clamp(MIN_CREATIVITY, MAX_CREATIVITY)
        } else {
            GenerationOptions::default().creativity
        };
        self.detail_level = self.detail_level.clamp(1, 5);
        self.personalization = self.personalization.clamp(1, 5);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_controls() {
        let opts = GenerationOptions::default();
        assert_eq!(opts.model, "gemini-2.5-flash");
        assert_eq!(opts.tone, Tone::Adaptive);
        assert_eq!(opts.length, ResponseLength::Detailed);
        assert_eq!(opts.num_quotes, 5);
        assert!((opts.creativity - 0.9).abs() < f32::EPSILON);
        assert!(opts.include_steps);
        assert!(!opts.auto_speak);
    }

    #[test]
    fn test_normalized_clamps() {
        let opts = GenerationOptions {
            num_quotes: 42,
            creativity: 7.5,
            detail_level: 0,
            personalization: 9,
            ..Default::default()
        }
        .normalized();
        assert_eq!(opts.num_quotes, MAX_QUOTES);
        assert_eq!(opts.creativity, MAX_CREATIVITY);
        assert_eq!(opts.detail_level, 1);
        assert_eq!(opts.personalization, 5);
    }

    #[test]
    fn test_normalized_nan_creativity() {
        let opts = GenerationOptions {
            creativity: f32::NAN,
            ..Default::default()
        }
        .normalized();
        assert!((opts.creativity - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn test_tone_parse() {
        assert_eq!(Tone::from_str("Calm"), Some(Tone::Calm));
        assert_eq!(Tone::from_str("grumpy"), None);
    }

    #[test]
    fn test_length_parse() {
        assert_eq!(
            ResponseLength::from_str("extensive"),
            Some(ResponseLength::Extensive)
        );
        assert_eq!(ResponseLength::from_str(""), None);
    }
}
