// src/config/env.rs
// Environment-based configuration: API credential, model override, endpoint base

use crate::config::options::DEFAULT_MODEL;
use crate::error::{MotivatorError, Result};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Default Gemini REST base; `{base}/{model}:generateContent`
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Values read once at process start
#[derive(Clone)]
pub struct EnvConfig {
    /// Gemini/Google API key (GEMINI_API_KEY or GOOGLE_API_KEY)
    pub api_key: String,
    /// Model id (GEMINI_MODEL)
    pub model: String,
    /// Endpoint base URL (GEMINI_API_BASE)
    pub api_base: String,
}

// Keep the key out of debug output
impl std::fmt::Debug for EnvConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl EnvConfig {
    /// Load `.env` (if present) and then read the process environment.
    ///
    /// A missing credential is a `Config` error; callers treat it as fatal.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
            Err(_) => debug!(".env file not found, using process environment"),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (process env in production, maps in tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read_key = |name: &str| lookup(name).filter(|k| !k.trim().is_empty());

        let api_key = read_key("GEMINI_API_KEY")
            .or_else(|| read_key("GOOGLE_API_KEY"))
            .ok_or_else(|| {
                warn!("No API key configured");
                MotivatorError::Config(
                    "No GEMINI_API_KEY found. Please add it to your .env file and restart the app."
                        .to_string(),
                )
            })?;

        let model = value_or(&lookup, "GEMINI_MODEL", DEFAULT_MODEL.to_string());
        let api_base = value_or(&lookup, "GEMINI_API_BASE", DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        info!(model = %model, "Gemini credential loaded");

        Ok(Self {
            api_key: api_key.trim().to_string(),
            model,
            api_base,
        })
    }
}

/// Read and parse a value, ignoring trailing `# comments` and whitespace
fn value_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            if clean_val.is_empty() {
                return default;
            }
            match clean_val.parse::<T>() {
                Ok(parsed) => {
                    debug!(key, value = clean_val, "Config value from environment");
                    parsed
                }
                Err(_) => {
                    warn!(key, value = %val, "Config value failed to parse, using default");
                    default
                }
            }
        }
        None => default,
    }
}

/// Log level from MOTIVATOR_LOG, if set and recognised
pub fn log_level_from_env() -> Option<tracing::Level> {
    std::env::var("MOTIVATOR_LOG")
        .ok()
        .and_then(|v| tracing::Level::from_str(v.trim()).ok())
}
