// src/response/parser.rs
// Turns raw model output into a ResultObject; never fails

use crate::emotion::EmotionProfile;
use crate::response::fallback::synthesize;
use crate::response::history::ResponseHistory;
use crate::response::strategies::{ParseStrategy, default_strategies};
use crate::response::types::{Mode, ResultKind, ResultObject};
use tracing::{debug, info};

pub struct ResponseParser {
    strategies: Vec<Box<dyn ParseStrategy>>,
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseParser {
    /// Parser with the standard strict → fenced → brace-span order
    pub fn new() -> Self {
        Self::with_strategies(default_strategies())
    }

    pub fn with_strategies(strategies: Vec<Box<dyn ParseStrategy>>) -> Self {
        Self { strategies }
    }

    /// First strategy whose object reads as `kind`, with its name
    pub fn try_strategies(
        &self,
        raw: &str,
        kind: ResultKind,
    ) -> Option<(&'static str, ResultObject)> {
        if raw.trim().is_empty() {
            return None;
        }

        self.strategies.iter().find_map(|strategy| {
            let value = strategy.extract(raw)?;
            match ResultObject::from_value(value, kind) {
                Some(result) => Some((strategy.name(), result)),
                None => {
                    debug!(
                        strategy = strategy.name(),
                        expected = %kind,
                        "Extracted JSON has wrong shape"
                    );
                    None
                }
            }
        })
    }

    /// Parse `raw` for `mode`, falling back to a synthesized result.
    ///
    /// Every outcome is appended to `history` under the hash of `user_text`.
    pub fn parse(
        &self,
        raw: &str,
        profile: &EmotionProfile,
        user_text: &str,
        mode: Mode,
        history: &mut ResponseHistory,
    ) -> ResultObject {
        let kind = mode.requested_kind();

        let (result, parsed) = match self.try_strategies(raw, kind) {
            Some((strategy, result)) => {
                debug!(strategy, kind = %kind, "Parsed model output");
                (result, true)
            }
            None => {
                info!(
                    kind = %kind,
                    raw_len = raw.len(),
                    emotion = %profile.primary_emotion,
                    "Model output unusable, synthesizing fallback"
                );
                (synthesize(kind, profile, user_text), false)
            }
        };

        let hash = history.record(user_text, &result, parsed);
        debug!(context_hash = %hash, parsed, "Recorded response history");

        result
    }
}
