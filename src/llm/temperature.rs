// src/llm/temperature.rs
// Effective sampling temperature from creativity, input text, and emotion

use crate::emotion::{Emotion, EmotionProfile};
use serde::Deserialize;

/// Tunables behind the temperature formula. Only the clamp range is a contract.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TemperatureTunables {
    /// Lower bound applied to the creativity slider before adjustments
    pub base_floor: f32,
    /// Upper end of the per-input variance, drawn from [0, max_variance)
    pub max_variance: f32,
    /// Added for upbeat emotions, subtracted for low ones
    pub emotion_shift: f32,
    pub min: f32,
    pub max: f32,
    pub upbeat: Vec<Emotion>,
    pub low: Vec<Emotion>,
}

impl Default for TemperatureTunables {
    fn default() -> Self {
        Self {
            base_floor: 0.8,
            max_variance: 0.2,
            emotion_shift: 0.1,
            min: 0.7,
            max: 1.0,
            upbeat: vec![Emotion::Excited],
            low: vec![Emotion::Sad, Emotion::Anxious],
        }
    }
}

impl TemperatureTunables {
    /// Clamp range with non-finite values replaced and bounds ordered
    fn bounds(&self) -> (f32, f32) {
        let defaults = Self::default();
        let min = if self.min.is_finite() { self.min } else { defaults.min };
        let max = if self.max.is_finite() { self.max } else { defaults.max };
        if min <= max { (min, max) } else { (max, min) }
    }

    /// Compute the temperature for one request
    pub fn temperature(&self, creativity: f32, user_text: &str, profile: &EmotionProfile) -> f32 {
        let base = self.base_floor.max(creativity);
        let variance = input_variance(user_text) * self.max_variance;

        let shift = if self.upbeat.contains(&profile.primary_emotion) {
            self.emotion_shift
        } else if self.low.contains(&profile.primary_emotion) {
            -self.emotion_shift
        } else {
            0.0
        };

        let (min, max) = self.bounds();
        let raw = base + shift + variance;
        if raw.is_finite() { raw.clamp(min, max) } else { min }
    }
}

/// Deterministic per-input fraction in [0.0, 1.0), in steps of 0.01
pub fn input_variance(user_text: &str) -> f32 {
    let digest = md5::compute(user_text.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest.0[..8]);
    (u64::from_le_bytes(head) % 100) as f32 / 100.0
}
