// src/prompt.rs
// Instruction assembly: static system prompt + personalization context + directives

use crate::config::{GenerationOptions, Tone};
use crate::emotion::{EmotionProfile, analyze};
use crate::response::{Mode, context_hash, truncate_chars};
use rand::Rng;

/// Static instruction describing both output shapes and the personalization rules
pub const SYSTEM_PROMPT: &str = r#"You are a caring friend and motivational coach with a deep understanding of human emotions. The user will share something with you - analyze their EXACT words, tone, and emotional state.

CRITICAL RULES FOR PERSONALIZATION:
1. NEVER use generic templates or standard responses
2. Reference their SPECIFIC words and situation in your response
3. Match their emotional energy level (calm for sad, energetic for excited, etc.)
4. Use their exact language style and vocabulary level
5. Address their SPECIFIC concerns, not general ones
6. Create responses that feel like you know them personally

EMOTIONAL ANALYSIS REQUIRED:
- Identify their primary emotion (sad, excited, anxious, angry, confused, etc.)
- Determine their energy level (high, medium, low)
- Note any specific triggers or situations they mention
- Assess what type of support they need (comfort, celebration, guidance, etc.)

PERSONALIZATION CHECKLIST:
- Reference specific words/phrases they used
- Mirror their communication style
- Address their exact situation
- Match their emotional tone
- Provide situation-specific advice
- Use relevant metaphors for their context
- Give actionable steps for THEIR specific challenge

You MUST return a single valid JSON object ONLY (no backticks, markdown, or extra text).

Two output shapes:

1) For mode="message":
{
  "type": "message",
  "motivation": "<Write a deeply personalized response that directly quotes or references their specific words. Mirror their tone - if they're excited, be excited with them. If they're sad, be gentle and comforting. Make them feel truly seen and understood.>",
  "steps": ["<Give them 4 specific, actionable steps that directly address their EXACT situation and challenges>"],
  "mantra": "<Create a mantra using words or themes from their message - make it personal to their situation>",
  "quotes": [{"quote":"<Choose quotes that directly relate to their specific emotion and situation>", "author":"<author>", "context":"<Explain why THIS quote is perfect for THEIR specific situation>"}, ...],
  "reflection_questions": ["<Ask questions that dig into their specific situation and help them process their exact feelings>"],
  "daily_affirmation": "<Create an affirmation that directly addresses their situation and uses language that resonates with their message>"
}

2) For mode="quote":
{
  "type": "quote",
  "quotes": [{"quote":"<Select quotes that match their emotional state and specific situation>", "author":"<author>", "context":"<Why this quote speaks to their exact circumstances>", "category":"<category that fits their need>"}, ...],
  "reflection": "<Write about how these quotes specifically relate to what they shared - use their words and reference their situation>",
  "theme": "<Identify a theme that emerges from THEIR specific message>",
  "application": "<Give specific ways they can apply these quotes to their exact situation>"
}

REMEMBER: Every word should feel like it was written specifically for this person's unique situation. NO GENERIC ADVICE ALLOWED."#;

const CLOSING_DIRECTIVE: &str = "Create a response that feels like you're their close friend who truly understands their specific situation. NO GENERIC RESPONSES ALLOWED.";

/// Echo lengths (characters) of the user's words inside the prompt
const EXACT_WORDS_ECHO: usize = 100;
const REFERENCE_ECHO: usize = 50;

/// Per-call uniqueness tag range
const TAG_RANGE: std::ops::RangeInclusive<u16> = 1000..=9999;

/// Fresh random tag; only there to discourage repeated phrasing
pub fn random_tag() -> u16 {
    rand::rng().random_range(TAG_RANGE)
}

/// Builds the instruction string from the user's options
#[derive(Debug, Clone)]
pub struct PromptBuilder<'a> {
    options: &'a GenerationOptions,
}

impl<'a> PromptBuilder<'a> {
    pub fn new(options: &'a GenerationOptions) -> Self {
        Self { options }
    }

    /// Analyze `user_text` and build with a fresh random tag
    pub fn build(&self, user_text: &str, mode: Mode) -> String {
        self.build_with(user_text, mode, &analyze(user_text), random_tag())
    }

    /// Build from an existing profile and an explicit tag
    pub fn build_with(
        &self,
        user_text: &str,
        mode: Mode,
        profile: &EmotionProfile,
        tag: u16,
    ) -> String {
        let mut prompt = SYSTEM_PROMPT.trim().to_string();
        prompt.push_str("\n\n");
        prompt.push_str(&self.personalization_context(user_text, profile, tag));
        prompt.push_str(&format!("\nMODE: {}\n", mode.requested_kind()));
        prompt.push_str(&format!("NUMBER OF QUOTES: {}\n", self.options.num_quotes));
        prompt.push('\n');
        prompt.push_str(CLOSING_DIRECTIVE);
        prompt
    }

    fn tone_line(&self, profile: &EmotionProfile) -> String {
        match self.options.tone {
            Tone::Adaptive => format!("match their {} energy", profile.primary_emotion),
            other => other.to_string(),
        }
    }

    fn personalization_context(
        &self,
        user_text: &str,
        profile: &EmotionProfile,
        tag: u16,
    ) -> String {
        let opts = self.options;
        let message_type = if profile.is_greeting { "greeting" } else { "substantive" };

        format!(
            r#"
UNIQUE RESPONSE ID: {hash}-{tag}
USER'S EXACT WORDS: "{exact}"
EMOTIONAL ANALYSIS:
- Primary emotion: {emotion}
- Energy level: {energy}
- Key themes: {themes}
- Message type: {message_type}

PERSONALIZATION REQUIREMENTS:
1. Quote or reference their EXACT words: "{reference}"
2. Match their emotional energy ({energy})
3. Address their primary emotion ({emotion})
4. Focus on themes: {themes}
5. Personalization level: {personalization}/5

RESPONSE STYLE ADAPTATION:
- Tone: {tone}
- Length: {length}
- Detail level: {detail}/5
- Creativity boost: {creativity}

CRITICAL: This response must be COMPLETELY DIFFERENT from any previous response. Use their specific situation, words, and emotional state to create something unique.
"#,
            hash = context_hash(user_text),
            tag = tag,
            exact = truncate_chars(user_text, EXACT_WORDS_ECHO),
            reference = truncate_chars(user_text, REFERENCE_ECHO),
            emotion = profile.primary_emotion,
            energy = profile.energy_level,
            themes = profile.themes_label(),
            message_type = message_type,
            personalization = opts.personalization,
            tone = self.tone_line(profile),
            length = opts.length,
            detail = opts.detail_level,
            creativity = opts.creativity,
        )
    }
}
