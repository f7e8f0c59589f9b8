// src/response/strategies.rs
// Independent JSON extraction strategies, tried in order by the parser

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// One way of pulling a JSON object out of raw model output
pub trait ParseStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Return the extracted JSON object, or `None` if this strategy does not apply
    fn extract(&self, raw: &str) -> Option<Value>;
}

/// Parse `candidate` and keep it only if it is a JSON object
fn parse_object(candidate: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(candidate) {
        Ok(value @ Value::Object(_)) => Some(value),
        _ => None,
    }
}

/// The whole text is the JSON object
pub struct StrictJson;

impl ParseStrategy for StrictJson {
    fn name(&self) -> &'static str {
        "strict"
    }

    fn extract(&self, raw: &str) -> Option<Value> {
        parse_object(raw)
    }
}

/// Fenced code block, optionally tagged `json`, wrapping an object
static FENCED_OBJECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This is a static literal regex pattern; compilation cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").expect("fenced block regex")
});

/// First fenced code block holding an object
pub struct FencedBlock;

impl ParseStrategy for FencedBlock {
    fn name(&self) -> &'static str {
        "fenced"
    }

    fn extract(&self, raw: &str) -> Option<Value> {
        let captures = FENCED_OBJECT_RE.captures(raw)?;
        parse_object(captures.get(1)?.as_str())
    }
}

/// Span from the first `{` to the last `}`
pub struct BraceSpan;

impl ParseStrategy for BraceSpan {
    fn name(&self) -> &'static str {
        "brace-span"
    }

    fn extract(&self, raw: &str) -> Option<Value> {
        let start = raw.find('{')?;
        let end = raw.rfind('}')?;
        if end <= start {
            return None;
        }
        parse_object(&raw[start..=end])
    }
}

/// Strict parse, then fenced block, then brace span
pub fn default_strategies() -> Vec<Box<dyn ParseStrategy>> {
    vec![Box::new(StrictJson), Box::new(FencedBlock), Box::new(BraceSpan)]
}
