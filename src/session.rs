// src/session.rs
// Session state and the generate pipeline: analyze → prompt → generate → parse

use crate::config::GenerationOptions;
use crate::emotion::{EmotionProfile, analyze};
use crate::error::{MotivatorError, Result};
use crate::llm::{GenerationRequest, TemperatureTunables, TextGenerator};
use crate::prompt::PromptBuilder;
use crate::response::{Mode, ResponseHistory, ResponseParser, ResultObject};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// State held for one interactive session
#[derive(Debug, Default)]
pub struct SessionState {
    /// Last successful result; kept until overwritten or cleared
    pub current: Option<ResultObject>,
    /// Mode `current` was generated with
    pub current_mode: Mode,
    pub history: ResponseHistory,
    pub mode: Mode,
    /// Surface the emotion profile alongside results
    pub debug: bool,
    /// Profile of the most recent input, whether or not generation succeeded.
    /// `None` after an empty input.
    pub last_profile: Option<EmotionProfile>,
}

impl SessionState {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Drop the current result; history is kept
    pub fn clear(&mut self) {
        self.current = None;
        self.last_profile = None;
    }

    /// Current result with the mode it was generated for
    pub fn current_view(&self) -> Option<(&ResultObject, Mode)> {
        self.current.as_ref().map(|r| (r, self.current_mode))
    }
}

/// One line typed into the interactive loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Mood text to run through the pipeline
    Input(String),
    SetMode(Mode),
    Clear,
    ToggleDebug,
    Show,
    Examples,
    Help,
    Quit,
    /// Control command that could not be understood, with a hint
    Invalid(String),
}

pub const HELP_TEXT: &str = "Type how you feel and press enter. Commands:
  :mode <message|quote|both>  switch experience
  :clear                      clear the current response
  :debug                      toggle emotion debug info
  :show                       show the current response again
  :examples                   list example inputs
  :help                       show this help
  :quit                       leave";

impl SessionCommand {
    /// Lines starting with `:` are commands; everything else is input
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix(':') else {
            return Self::Input(line.to_string());
        };

        let mut parts = rest.split_whitespace();
        match parts.next().unwrap_or("") {
            "mode" | "m" => match parts.next().and_then(Mode::from_str) {
                Some(mode) => Self::SetMode(mode),
                None => Self::Invalid("usage: :mode <message|quote|both>".to_string()),
            },
            "clear" | "c" => Self::Clear,
            "debug" | "d" => Self::ToggleDebug,
            "show" | "s" => Self::Show,
            "examples" | "e" => Self::Examples,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => Self::Invalid(format!("unknown command ':{}', try :help", other)),
        }
    }
}

/// Runs the pipeline against a text generator
pub struct Motivator {
    generator: Arc<dyn TextGenerator>,
    options: GenerationOptions,
    tunables: TemperatureTunables,
    parser: ResponseParser,
}

impl Motivator {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        options: GenerationOptions,
        tunables: TemperatureTunables,
    ) -> Self {
        Self {
            generator,
            options: options.normalized(),
            tunables,
            parser: ResponseParser::new(),
        }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Build the request for `user_text` without sending it
    pub fn prepare(
        &self,
        user_text: &str,
        mode: Mode,
        profile: &EmotionProfile,
    ) -> GenerationRequest {
        let instruction = PromptBuilder::new(&self.options).build_with(
            user_text,
            mode,
            profile,
            crate::prompt::random_tag(),
        );
        let temperature = self.tunables.temperature(self.options.creativity, user_text, profile);
        GenerationRequest::new(instruction, self.options.model.clone(), temperature)
    }

    /// One user action. On error the current result and history are left
    /// untouched; `last_profile` always reflects this input.
    #[instrument(
        skip(self, session, user_text, mode),
        fields(mode = %mode, text_len = user_text.len())
    )]
    pub async fn generate<'s>(
        &self,
        session: &'s mut SessionState,
        user_text: &str,
        mode: Mode,
    ) -> Result<&'s ResultObject> {
        if user_text.trim().is_empty() {
            session.last_profile = None;
            return Err(MotivatorError::EmptyInput);
        }

        let profile = analyze(user_text);
        session.last_profile = Some(profile.clone());
        debug!(
            emotion = %profile.primary_emotion,
            energy = %profile.energy_level,
            themes = %profile.themes_label(),
            greeting = profile.is_greeting,
            "Analyzed input"
        );

        let request = self.prepare(user_text, mode, &profile);
        info!(
            provider = self.generator.name(),
            model = %request.model,
            temperature = request.temperature,
            "Requesting generation"
        );

        let output = self.generator.generate(&request).await.map_err(|e| {
            warn!(error = %e, "Generation failed, keeping previous result");
            match e {
                MotivatorError::Generation(_) => e,
                other => MotivatorError::Generation(other.to_string()),
            }
        })?;

        let result = self
            .parser
            .parse(&output.text, &profile, user_text, mode, &mut session.history);

        session.current_mode = mode;
        Ok(session.current.insert(result))
    }
}
