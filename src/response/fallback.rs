// src/response/fallback.rs
// Deterministic results built from the emotion profile when parsing fails

use crate::emotion::{Emotion, EmotionProfile};
use crate::response::text::truncate_chars;
use crate::response::types::{MessageResult, QuoteItem, QuoteResult, ResultKind, ResultObject};

/// Echo lengths (characters) used in the fabricated text
const MOTIVATION_ECHO: usize = 100;
const STEP_ECHO: usize = 50;
const QUESTION_ECHO: usize = 30;
const REFLECTION_ECHO: usize = 100;

/// Build the fallback for `kind`. Same inputs always give the same object.
pub fn synthesize(kind: ResultKind, profile: &EmotionProfile, user_text: &str) -> ResultObject {
    match kind {
        ResultKind::Message => ResultObject::Message(fallback_message(profile, user_text)),
        ResultKind::Quote => ResultObject::Quote(fallback_quote(profile, user_text)),
    }
}

fn motivation_text(profile: &EmotionProfile, user_text: &str) -> String {
    let opener = format!(
        "I hear you when you say '{}'. ",
        truncate_chars(user_text, MOTIVATION_ECHO)
    );

    let continuation = match profile.primary_emotion {
        Emotion::Excited => {
            "Your excitement is contagious! This energy you're feeling is powerful - it's the fuel of achievement."
        }
        Emotion::Sad => {
            "I can feel the heaviness in your words, and I want you to know that it's okay to feel this way."
        }
        Emotion::Anxious => {
            "I understand that anxiety can feel overwhelming, but you're stronger than you realize."
        }
        _ if profile.is_greeting => {
            return "Hello there! I'm so glad you reached out today. How are you really feeling right now?"
                .to_string();
        }
        _ => {
            "Your situation is unique, and you deserve support that truly understands what you're going through."
        }
    };

    opener + continuation
}

fn fallback_message(profile: &EmotionProfile, user_text: &str) -> MessageResult {
    let emotion = profile.primary_emotion;

    MessageResult {
        motivation: Some(motivation_text(profile, user_text)),
        steps: vec![
            format!(
                "Reflect on what you just shared: '{}'",
                truncate_chars(user_text, STEP_ECHO)
            ),
            format!("Focus on your {} feelings and what they're telling you", emotion),
            "Take one small action that aligns with your current emotional state".to_string(),
            "Practice self-compassion as you navigate this moment".to_string(),
        ],
        mantra: Some(format!(
            "I honor my {} feelings and trust my journey",
            emotion
        )),
        quotes: vec![
            QuoteItem::new(
                "The only way to do great work is to love what you do.",
                "Steve Jobs",
                format!("This resonates with your {} energy", emotion),
            ),
            QuoteItem::new(
                "Success is not final, failure is not fatal: it is the courage to continue that counts.",
                "Winston Churchill",
                "Speaks to the resilience I see in your message",
            ),
        ],
        reflection_questions: vec![
            format!(
                "What does your {} feeling tell you about what you need right now?",
                emotion
            ),
            format!(
                "How can you honor the situation you described: '{}'?",
                truncate_chars(user_text, QUESTION_ECHO)
            ),
            "What would self-compassion look like in this moment?".to_string(),
        ],
        daily_affirmation: Some(format!(
            "I trust my {} feelings and my ability to navigate this situation",
            emotion
        )),
    }
}

fn fallback_quote(profile: &EmotionProfile, user_text: &str) -> QuoteResult {
    let emotion = profile.primary_emotion;

    QuoteResult {
        quotes: vec![
            QuoteItem::new(
                "The future belongs to those who believe in the beauty of their dreams.",
                "Eleanor Roosevelt",
                format!("This speaks to the {} energy in your message", emotion),
            )
            .with_category("motivation"),
            QuoteItem::new(
                "It does not matter how slowly you go as long as you do not stop.",
                "Confucius",
                "Perfectly fits your current situation",
            )
            .with_category("wisdom"),
        ],
        reflection: Some(format!(
            "Your words '{}' reveal someone who is {} and seeking guidance. These quotes speak directly to your emotional state.",
            truncate_chars(user_text, REFLECTION_ECHO),
            emotion
        )),
        theme: Some(format!("Navigating {} feelings with wisdom", emotion)),
        application: Some(format!(
            "Use these quotes to guide you through your current {} experience",
            emotion
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::analyze;

    #[test]
    fn test_message_fallback_echoes_text() {
        let text = "I'm so excited about my new job!";
        let result = synthesize(ResultKind::Message, &analyze(text), text);
        let msg = result.as_message().unwrap();
        let motivation = msg.motivation.as_deref().unwrap();
        assert!(motivation.contains(text));
        assert!(motivation.contains("Your excitement is contagious!"));
        assert_eq!(msg.steps.len(), 4);
        assert_eq!(msg.quotes.len(), 2);
        assert_eq!(msg.reflection_questions.len(), 3);
        assert_eq!(
            msg.mantra.as_deref(),
            Some("I honor my excited feelings and trust my journey")
        );
    }

    #[test]
    fn test_message_fallback_truncates_long_text() {
        let text = "word ".repeat(60);
        let result = synthesize(ResultKind::Message, &analyze(&text), &text);
        let msg = result.as_message().unwrap();
        let motivation = msg.motivation.as_deref().unwrap();
        let expected_echo = format!("'{}...'", &text[..100]);
        assert!(motivation.contains(&expected_echo));
        assert!(msg.steps[0].contains(&format!("'{}...'", &text[..50])));
        assert!(msg.reflection_questions[1].contains(&format!("'{}...'", &text[..30])));
    }

    #[test]
    fn test_greeting_replaces_motivation() {
        let result = synthesize(ResultKind::Message, &analyze("hello"), "hello");
        let msg = result.as_message().unwrap();
        assert_eq!(
            msg.motivation.as_deref(),
            Some("Hello there! I'm so glad you reached out today. How are you really feeling right now?")
        );
    }

    #[test]
    fn test_emotion_branch_beats_greeting() {
        // Short and contains "hi", but "sad" is checked first
        let result = synthesize(ResultKind::Message, &analyze("hi, sad"), "hi, sad");
        let motivation = result.as_message().unwrap().motivation.clone().unwrap();
        assert!(motivation.starts_with("I hear you when you say 'hi, sad'."));
        assert!(motivation.contains("heaviness"));
    }

    #[test]
    fn test_default_branch() {
        let text = "Just thinking about things";
        let result = synthesize(ResultKind::Message, &analyze(text), text);
        let motivation = result.as_message().unwrap().motivation.clone().unwrap();
        assert!(motivation.contains("Your situation is unique"));
    }

    #[test]
    fn test_quote_fallback_shape() {
        let result = synthesize(ResultKind::Quote, &analyze("hi"), "hi");
        let quote = result.as_quote().unwrap();
        assert_eq!(quote.quotes.len(), 2);
        assert_eq!(quote.quotes[0].author, "Eleanor Roosevelt");
        assert_eq!(quote.quotes[1].category.as_deref(), Some("wisdom"));
        assert!(quote.reflection.as_deref().unwrap().contains("'hi'"));
        assert_eq!(
            quote.theme.as_deref(),
            Some("Navigating neutral feelings with wisdom")
        );
    }

    #[test]
    fn test_fallback_deterministic() {
        let text = "I'm anxious about my presentation tomorrow";
        let profile = analyze(text);
        for kind in [ResultKind::Message, ResultKind::Quote] {
            let a = serde_json::to_vec(&synthesize(kind, &profile, text)).unwrap();
            let b = serde_json::to_vec(&synthesize(kind, &profile, text)).unwrap();
            assert_eq!(a, b);
        }
    }
}
