// src/response/types.rs
// Result payloads (message / quote) and the display mode that requests them

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Experience chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Message,
    Quote,
    /// Message fields, then quote fields if present
    Both,
}

impl Mode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "message" => Some(Self::Message),
            "quote" => Some(Self::Quote),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Quote => "quote",
            Self::Both => "both",
        }
    }

    /// Shape asked of the generation endpoint for this mode
    pub fn requested_kind(&self) -> ResultKind {
        match self {
            Self::Message | Self::Both => ResultKind::Message,
            Self::Quote => ResultKind::Quote,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag of a [`ResultObject`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Message,
    Quote,
}

impl ResultKind {
    /// Keys of the payload shape for this kind
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::Message => &[
                "motivation",
                "steps",
                "mantra",
                "quotes",
                "reflection_questions",
                "daily_affirmation",
            ],
            Self::Quote => &["quotes", "reflection", "theme", "application"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Quote => "quote",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Treat an explicit `null` like a missing key
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuoteItem {
    #[serde(default, deserialize_with = "nullable")]
    pub quote: String,
    #[serde(default, deserialize_with = "nullable")]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl QuoteItem {
    pub fn new(quote: &str, author: &str, context: impl Into<String>) -> Self {
        Self {
            quote: quote.to_string(),
            author: author.to_string(),
            context: Some(context.into()),
            category: None,
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// `"<quote> — <author>"`
    pub fn attribution(&self) -> String {
        format!("{} — {}", self.quote, self.author)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessageResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivation: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mantra: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub quotes: Vec<QuoteItem>,
    #[serde(default, deserialize_with = "nullable")]
    pub reflection_questions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_affirmation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuoteResult {
    #[serde(default, deserialize_with = "nullable")]
    pub quotes: Vec<QuoteItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
}

/// Rendered payload; the `type` tag always matches the requested kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResultObject {
    Message(MessageResult),
    Quote(QuoteResult),
}

impl ResultObject {
    pub fn kind(&self) -> ResultKind {
        match self {
            Self::Message(_) => ResultKind::Message,
            Self::Quote(_) => ResultKind::Quote,
        }
    }

    pub fn quotes(&self) -> &[QuoteItem] {
        match self {
            Self::Message(m) => &m.quotes,
            Self::Quote(q) => &q.quotes,
        }
    }

    pub fn as_message(&self) -> Option<&MessageResult> {
        match self {
            Self::Message(m) => Some(m),
            Self::Quote(_) => None,
        }
    }

    pub fn as_quote(&self) -> Option<&QuoteResult> {
        match self {
            Self::Quote(q) => Some(q),
            Self::Message(_) => None,
        }
    }

    /// Read a JSON object as the `expected` shape.
    ///
    /// A missing `type` is taken as `expected`; a different `type`, a
    /// non-object, an object without any non-null field of the shape, or
    /// fields of the wrong JSON type yield `None`.
    pub fn from_value(value: Value, expected: ResultKind) -> Option<Self> {
        let Value::Object(mut map) = value else {
            return None;
        };

        let has_payload = expected
            .fields()
            .iter()
            .any(|key| map.get(*key).is_some_and(|v| !v.is_null()));
        if !has_payload {
            return None;
        }

        match map.get("type") {
            None | Some(Value::Null) => {
                map.insert("type".to_string(), Value::from(expected.as_str()));
            }
            Some(Value::String(tag)) if tag.trim().eq_ignore_ascii_case(expected.as_str()) => {
                map.insert("type".to_string(), Value::from(expected.as_str()));
            }
            Some(_) => return None,
        }

        serde_json::from_value(Value::Object(map)).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ============================================================================
    // Mode tests
    // ============================================================================

    #[test]
    fn test_mode_requested_kind() {
        assert_eq!(Mode::Message.requested_kind(), ResultKind::Message);
        assert_eq!(Mode::Both.requested_kind(), ResultKind::Message);
        assert_eq!(Mode::Quote.requested_kind(), ResultKind::Quote);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(Mode::from_str("BOTH"), Some(Mode::Both));
        assert_eq!(Mode::from_str("poem"), None);
    }

    // ============================================================================
    // from_value tests
    // ============================================================================

    #[test]
    fn test_minimal_quote_round_trips_unchanged() {
        let value = json!({"type": "quote", "quotes": []});
        let result = ResultObject::from_value(value.clone(), ResultKind::Quote).unwrap();
        assert_eq!(serde_json::to_value(&result).unwrap(), value);
    }

    #[test]
    fn test_full_message_shape() {
        let value = json!({
            "type": "message",
            "motivation": "You've got this.",
            "steps": ["Breathe", "Plan"],
            "mantra": "Step by step",
            "quotes": [{"quote": "Q", "author": "A", "context": "C"}],
            "reflection_questions": ["Why?"],
            "daily_affirmation": "I can."
        });
        let result = ResultObject::from_value(value, ResultKind::Message).unwrap();
        let msg = result.as_message().unwrap();
        assert_eq!(msg.steps.len(), 2);
        assert_eq!(msg.quotes[0].context.as_deref(), Some("C"));
        assert_eq!(msg.daily_affirmation.as_deref(), Some("I can."));
    }

    #[test]
    fn test_missing_type_takes_expected() {
        let value = json!({"quotes": [], "reflection": "r"});
        let result = ResultObject::from_value(value, ResultKind::Quote).unwrap();
        assert_eq!(result.kind(), ResultKind::Quote);
    }

    #[test]
    fn test_mismatched_type_rejected() {
        let value = json!({"type": "quote", "quotes": []});
        assert!(ResultObject::from_value(value, ResultKind::Message).is_none());
    }

    #[test]
    fn test_wrong_field_type_rejected() {
        let value = json!({"type": "message", "steps": "do things"});
        assert!(ResultObject::from_value(value, ResultKind::Message).is_none());
    }

    #[test]
    fn test_nulls_read_as_missing() {
        let value = json!({"type": "message", "motivation": "m", "steps": null, "mantra": null});
        let result = ResultObject::from_value(value, ResultKind::Message).unwrap();
        let msg = result.as_message().unwrap();
        assert!(msg.steps.is_empty());
        assert!(msg.mantra.is_none());
    }

    #[test]
    fn test_object_without_shape_fields_rejected() {
        assert!(ResultObject::from_value(json!({}), ResultKind::Message).is_none());
        assert!(ResultObject::from_value(json!({"type": "quote"}), ResultKind::Quote).is_none());
        let nulls = json!({"motivation": null, "steps": null});
        assert!(ResultObject::from_value(nulls, ResultKind::Message).is_none());
        // Message-only keys do not make a quote
        let wrong_keys = json!({"motivation": "hi", "mantra": "m"});
        assert!(ResultObject::from_value(wrong_keys, ResultKind::Quote).is_none());
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(ResultObject::from_value(json!([1, 2]), ResultKind::Quote).is_none());
        assert!(ResultObject::from_value(json!("text"), ResultKind::Quote).is_none());
    }

    #[test]
    fn test_quote_attribution() {
        let q = QuoteItem::new("Keep going.", "Someone", "ctx");
        assert_eq!(q.attribution(), "Keep going. — Someone");
    }
}
