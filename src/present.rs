// src/present.rs
// Terminal rendering of results, playback summary, welcome and debug screens

use crate::config::GenerationOptions;
use crate::emotion::EmotionProfile;
use crate::error::MotivatorError;
use crate::response::{MessageResult, Mode, QuoteItem, QuoteResult, ResultObject};
use colored::Colorize;
use serde::Serialize;

/// Example inputs shown on the welcome screen
pub const EXAMPLE_INPUTS: &[(&str, &[&str])] = &[
    ("Simple greetings", &["Hi", "Hello there", "Good morning"]),
    (
        "Different emotions",
        &[
            "I'm feeling really sad today",
            "I'm so excited about my new job!",
            "I'm anxious about my presentation tomorrow",
            "I'm angry at my boss",
            "I'm confused about what to do next",
        ],
    ),
    (
        "Different situations",
        &[
            "I just broke up with my partner",
            "I got promoted at work!",
            "I'm tired of everything",
            "I don't know what I want in life",
        ],
    ),
];

/// Color unless NO_COLOR is set to a non-empty value
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
}

/// Text handed to speech / clipboard, with its widget title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Playback {
    pub title: &'static str,
    pub text: String,
    pub auto_speak: bool,
}

impl Playback {
    /// Widget title per display mode
    pub fn title_for(mode: Mode) -> &'static str {
        match mode {
            Mode::Message => "Motivational Message",
            Mode::Quote => "Quote Collection",
            Mode::Both => "Complete Experience",
        }
    }
}

/// Plain-text summary: motivation + mantra + affirmation, or first quote + reflection
pub fn summary_text(result: &ResultObject) -> String {
    let parts: Vec<String> = match result {
        ResultObject::Message(m) => [&m.motivation, &m.mantra, &m.daily_affirmation]
            .into_iter()
            .flatten()
            .cloned()
            .collect(),
        ResultObject::Quote(q) => {
            let first = q.quotes.first().map(QuoteItem::attribution);
            [first, q.reflection.clone()].into_iter().flatten().collect()
        }
    };

    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub struct Presenter<'a> {
    options: &'a GenerationOptions,
    color: bool,
}

impl<'a> Presenter<'a> {
    pub fn new(options: &'a GenerationOptions, color: bool) -> Self {
        Self { options, color }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            format!("### {}", text).bold().cyan().to_string()
        } else {
            format!("### {}", text)
        }
    }

    fn highlight(&self, text: String) -> String {
        if self.color {
            text.bold().magenta().to_string()
        } else {
            text
        }
    }

    fn dim(&self, text: String) -> String {
        if self.color { text.dimmed().to_string() } else { text }
    }

    /// Render `result` for `mode`
    pub fn render(&self, result: &ResultObject, mode: Mode) -> String {
        let mut out = Vec::new();
        match result {
            ResultObject::Message(m) => {
                self.render_message(m, mode != Mode::Both, &mut out);
                if mode == Mode::Both && !m.quotes.is_empty() {
                    out.push("---".to_string());
                    self.render_quote_list(&m.quotes, &mut out);
                }
            }
            ResultObject::Quote(q) => self.render_quotes(q, &mut out),
        }

        if let Some(playback) = self.playback(result, mode) {
            out.push(String::new());
            out.push(self.render_playback(&playback));
        }

        out.join("\n")
    }

    fn render_message(&self, m: &MessageResult, inline_quotes: bool, out: &mut Vec<String>) {
        out.push(self.heading("💫 Your Personalized Motivation"));
        out.push(m.motivation.clone().unwrap_or_default());

        if self.options.include_steps && !m.steps.is_empty() {
            out.push(String::new());
            out.push(self.heading("🎯 Action Steps"));
            for (i, step) in m.steps.iter().enumerate() {
                out.push(format!("  {}. {}", i + 1, step));
            }
        }

        if let Some(mantra) = m.mantra.as_ref().filter(|s| !s.is_empty()) {
            out.push(String::new());
            out.push(self.highlight(format!("🎭 Your Mantra: \"{}\"", mantra)));
        }

        if self.options.include_daily_affirmation
            && let Some(affirmation) = m.daily_affirmation.as_ref().filter(|s| !s.is_empty())
        {
            out.push(String::new());
            out.push(self.highlight(format!("✨ Daily Affirmation: \"{}\"", affirmation)));
        }

        if self.options.include_reflection_questions && !m.reflection_questions.is_empty() {
            out.push(String::new());
            out.push(self.heading("🤔 Reflection Questions"));
            for (i, question) in m.reflection_questions.iter().enumerate() {
                out.push(format!("  {}. {}", i + 1, question));
            }
        }

        if inline_quotes && self.options.include_quotes_in_message && !m.quotes.is_empty() {
            out.push(String::new());
            out.push(self.heading("📚 Inspiring Quotes"));
            for q in &m.quotes {
                out.push(format!("  \"{}\" — {}", q.quote, q.author));
                if let Some(context) = q.context.as_ref().filter(|c| !c.is_empty()) {
                    out.push(self.dim(format!("     💡 {}", context)));
                }
            }
        }
    }

    fn render_quote_list(&self, quotes: &[QuoteItem], out: &mut Vec<String>) {
        out.push(self.heading("📚 Curated Quotes for You"));
        for (i, q) in quotes.iter().enumerate() {
            out.push(format!("  {}. \"{}\" — {}", i + 1, q.quote, q.author));
            if let Some(context) = q.context.as_ref().filter(|c| !c.is_empty()) {
                out.push(self.dim(format!("     💡 {}", context)));
            }
            if let Some(category) = q.category.as_ref().filter(|c| !c.is_empty()) {
                out.push(self.dim(format!("     🏷️ Category: {}", category)));
            }
        }
    }

    fn render_quotes(&self, q: &QuoteResult, out: &mut Vec<String>) {
        if !q.quotes.is_empty() {
            self.render_quote_list(&q.quotes, out);
        }

        if let Some(theme) = q.theme.as_ref().filter(|s| !s.is_empty()) {
            out.push(String::new());
            out.push(self.heading(&format!("🎯 Theme: {}", theme)));
        }

        if let Some(reflection) = q.reflection.as_ref().filter(|s| !s.is_empty()) {
            out.push(String::new());
            out.push(self.heading("💭 Deep Reflection"));
            out.push(reflection.clone());
        }

        if let Some(application) = q.application.as_ref().filter(|s| !s.is_empty()) {
            out.push(String::new());
            out.push(self.heading("🚀 How to Apply This Wisdom"));
            out.push(application.clone());
        }
    }

    /// Playback widget model; `None` when there is nothing to read
    pub fn playback(&self, result: &ResultObject, mode: Mode) -> Option<Playback> {
        let text = summary_text(result);
        if text.is_empty() {
            return None;
        }
        Some(Playback {
            title: Playback::title_for(mode),
            text,
            auto_speak: self.options.auto_speak,
        })
    }

    fn render_playback(&self, playback: &Playback) -> String {
        let mut lines = vec![self.heading(&format!("🔊 {}", playback.title))];
        lines.push(self.dim(playback.text.clone()));
        if playback.auto_speak {
            lines.push(self.dim("(auto-speak enabled)".to_string()));
        }
        lines.join("\n")
    }

    /// Screen shown while there is no current result
    pub fn welcome(&self) -> String {
        let mut out = vec![
            self.highlight("✨ AI Personal Motivator & Quote Generator".to_string()),
            "💡 Welcome! Share your thoughts, choose your experience, and let AI create personalized inspiration for you.".to_string(),
            String::new(),
            self.heading("💡 Try these different inputs to see unique responses"),
        ];
        for (group, inputs) in EXAMPLE_INPUTS {
            out.push(format!("{}:", group));
            for input in *inputs {
                out.push(format!("  - \"{}\"", input));
            }
        }
        out.push(String::new());
        out.push("Tips: be specific about your situation, share your emotions honestly, mention what you're struggling with, and include context about your goals.".to_string());
        out.join("\n")
    }

    /// Visible error line for a failed action
    pub fn error_line(&self, err: &MotivatorError) -> String {
        let text = err.to_user_string();
        if self.color {
            text.red().bold().to_string()
        } else {
            text
        }
    }

    /// Raw emotion profile for the debug toggle
    pub fn debug_info(&self, profile: &EmotionProfile) -> String {
        let body = serde_json::to_string_pretty(profile).unwrap_or_else(|e| e.to_string());
        format!("{}\n{}", self.heading("🔍 Debug Info"), self.dim(body))
    }
}
