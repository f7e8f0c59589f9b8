// src/config/file.rs
// File-based preferences from ~/.motivator/config.toml

use crate::config::options::{GenerationOptions, ResponseLength, Tone};
use crate::llm::TemperatureTunables;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Top-level config structure
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub defaults: DefaultsSection,
    #[serde(default)]
    pub temperature: TemperatureTunables,
}

/// Default generation options; unset keys keep the built-in defaults
#[derive(Debug, Deserialize, Default)]
pub struct DefaultsSection {
    pub model: Option<String>,
    pub tone: Option<String>,
    pub length: Option<String>,
    pub num_quotes: Option<u8>,
    pub creativity: Option<f32>,
    pub detail_level: Option<u8>,
    pub personalization: Option<u8>,
    pub include_steps: Option<bool>,
    pub include_quotes_in_message: Option<bool>,
    pub include_reflection_questions: Option<bool>,
    pub include_daily_affirmation: Option<bool>,
    pub auto_speak: Option<bool>,
}

impl FileConfig {
    /// Load config from ~/.motivator/config.toml
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path; missing or invalid files yield defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded config from file");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse config file");
                    Self::default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
        }
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".motivator")
            .join("config.toml")
    }

    /// Overlay file defaults onto `base`
    pub fn apply_defaults(&self, base: GenerationOptions) -> GenerationOptions {
        let d = &self.defaults;
        let mut opts = base;

        if let Some(model) = d.model.as_ref().filter(|m| !m.trim().is_empty()) {
            opts.model = model.trim().to_string();
        }
        if let Some(ref tone) = d.tone {
            match Tone::from_str(tone) {
                Some(t) => opts.tone = t,
                None => warn!(value = %tone, "Unknown tone in config file, ignoring"),
            }
        }
        if let Some(ref length) = d.length {
            match ResponseLength::from_str(length) {
                Some(l) => opts.length = l,
                None => warn!(value = %length, "Unknown length in config file, ignoring"),
            }
        }
        if let Some(n) = d.num_quotes {
            opts.num_quotes = n;
        }
        if let Some(c) = d.creativity {
            opts.creativity = c;
        }
        if let Some(v) = d.detail_level {
            opts.detail_level = v;
        }
        if let Some(v) = d.personalization {
            opts.personalization = v;
        }
        if let Some(v) = d.include_steps {
            opts.include_steps = v;
        }
        if let Some(v) = d.include_quotes_in_message {
            opts.include_quotes_in_message = v;
        }
        if let Some(v) = d.include_reflection_questions {
            opts.include_reflection_questions = v;
        }
        if let Some(v) = d.include_daily_affirmation {
            opts.include_daily_affirmation = v;
        }
        if let Some(v) = d.auto_speak {
            opts.auto_speak = v;
        }

        opts.normalized()
    }
}
