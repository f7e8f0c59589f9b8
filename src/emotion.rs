// src/emotion.rs
// Keyword heuristic that maps mood text to a coarse emotion profile

use serde::{Deserialize, Serialize};
use std::fmt;

/// Version of the keyword tables below. Bump when any table changes so
/// recorded profiles can be compared against the table that produced them.
pub const KEYWORD_TABLE_VERSION: u32 = 1;

/// Emotion categories, in tie-break order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Excited,
    Sad,
    Anxious,
    Angry,
    Confused,
    Tired,
    Hopeful,
    Grateful,
    Neutral,
}

impl Emotion {
    /// Parse emotion from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "excited" => Some(Self::Excited),
            "sad" => Some(Self::Sad),
            "anxious" => Some(Self::Anxious),
            "angry" => Some(Self::Angry),
            "confused" => Some(Self::Confused),
            "tired" => Some(Self::Tired),
            "hopeful" => Some(Self::Hopeful),
            "grateful" => Some(Self::Grateful),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excited => "excited",
            Self::Sad => "sad",
            Self::Anxious => "anxious",
            Self::Angry => "angry",
            Self::Confused => "confused",
            Self::Tired => "tired",
            Self::Hopeful => "hopeful",
            Self::Grateful => "grateful",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    High,
    Medium,
    Low,
}

impl EnergyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Topic categories a mood text can touch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Work,
    Relationships,
    Health,
    Finances,
    Education,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Relationships => "relationships",
            Self::Health => "health",
            Self::Finances => "finances",
            Self::Education => "education",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Keyword tables ──────────────────────────────────────────────────────

/// (emotion, keywords). Declaration order is the tie-break order.
const EMOTION_TABLE: &[(Emotion, &[&str])] = &[
    (
        Emotion::Excited,
        &[
            "excited",
            "thrilled",
            "amazing",
            "fantastic",
            "awesome",
            "great news",
            "celebration",
            "happy",
            "joy",
        ],
    ),
    (
        Emotion::Sad,
        &[
            "sad",
            "depressed",
            "down",
            "crying",
            "hurt",
            "heartbroken",
            "devastated",
            "miserable",
        ],
    ),
    (
        Emotion::Anxious,
        &[
            "anxious",
            "worried",
            "nervous",
            "stress",
            "fear",
            "panic",
            "overwhelmed",
            "scared",
        ],
    ),
    (
        Emotion::Angry,
        &[
            "angry",
            "frustrated",
            "mad",
            "upset",
            "annoyed",
            "furious",
            "irritated",
        ],
    ),
    (
        Emotion::Confused,
        &[
            "confused",
            "lost",
            "unsure",
            "doubt",
            "uncertain",
            "don't know",
            "unclear",
        ],
    ),
    (
        Emotion::Tired,
        &["tired", "exhausted", "burnout", "drained", "worn out"],
    ),
    (
        Emotion::Hopeful,
        &[
            "hopeful",
            "optimistic",
            "looking forward",
            "positive",
            "motivated",
        ],
    ),
    (
        Emotion::Grateful,
        &["grateful", "thankful", "blessed", "appreciate", "lucky"],
    ),
];

const HIGH_ENERGY_WORDS: &[&str] = &[
    "excited", "thrilled", "amazing", "fantastic", "angry", "furious", "panic",
];

const LOW_ENERGY_WORDS: &[&str] = &["tired", "exhausted", "sad", "down", "drained"];

const THEME_TABLE: &[(Theme, &[&str])] = &[
    (Theme::Work, &["work", "job", "career", "boss", "colleague"]),
    (
        Theme::Relationships,
        &["relationship", "partner", "family", "friend"],
    ),
    (Theme::Health, &["health", "sick", "medical", "doctor"]),
    (Theme::Finances, &["money", "financial", "debt", "expensive"]),
    (
        Theme::Education,
        &["school", "study", "exam", "college", "university"],
    ),
];

const GREETING_WORDS: &[&str] = &["hi", "hello", "hey", "good morning", "good afternoon"];

/// Greetings are only recognised in texts shorter than this (in characters)
const GREETING_MAX_LEN: usize = 20;

/// Coarse emotional reading of one mood text. Recomputed per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionProfile {
    pub primary_emotion: Emotion,
    /// Every matching category, in table order
    pub all_emotions: Vec<Emotion>,
    pub energy_level: EnergyLevel,
    pub themes: Vec<Theme>,
    pub is_greeting: bool,
    /// Character count of the raw (untrimmed) input
    pub text_length: usize,
}

impl Default for EmotionProfile {
    fn default() -> Self {
        Self {
            primary_emotion: Emotion::Neutral,
            all_emotions: Vec::new(),
            energy_level: EnergyLevel::Medium,
            themes: Vec::new(),
            is_greeting: false,
            text_length: 0,
        }
    }
}

impl EmotionProfile {
    /// Themes joined for display, or "general" when none matched
    pub fn themes_label(&self) -> String {
        if self.themes.is_empty() {
            "general".to_string()
        } else {
            self.themes
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Analyze mood text against the keyword tables. Never fails.
pub fn analyze(user_text: &str) -> EmotionProfile {
    let text = user_text.trim().to_lowercase();

    let all_emotions: Vec<Emotion> = EMOTION_TABLE
        .iter()
        .filter(|(_, keywords)| contains_any(&text, keywords))
        .map(|(emotion, _)| *emotion)
        .collect();

    let primary_emotion = all_emotions.first().copied().unwrap_or(Emotion::Neutral);

    // High takes precedence when both sets match
    let energy_level = if contains_any(&text, HIGH_ENERGY_WORDS) {
        EnergyLevel::High
    } else if contains_any(&text, LOW_ENERGY_WORDS) {
        EnergyLevel::Low
    } else {
        EnergyLevel::Medium
    };

    let themes = THEME_TABLE
        .iter()
        .filter(|(_, keywords)| contains_any(&text, keywords))
        .map(|(theme, _)| *theme)
        .collect();

    let is_greeting =
        text.chars().count() < GREETING_MAX_LEN && contains_any(&text, GREETING_WORDS);

    EmotionProfile {
        primary_emotion,
        all_emotions,
        energy_level,
        themes,
        is_greeting,
        text_length: user_text.chars().count(),
    }
}
