// src/main.rs
// Motivator - AI personal motivator & quote generator

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use motivator::config::{
    EnvConfig, FileConfig, GenerationOptions, ResponseLength, Tone, env::log_level_from_env,
};
use motivator::emotion::analyze;
use motivator::llm::GeminiClient;
use motivator::present::{Presenter, color_enabled};
use motivator::response::Mode;
use motivator::session::{HELP_TEXT, Motivator, SessionCommand, SessionState};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "motivator")]
#[command(about = "Personalized motivation and quotes from Gemini")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    options: OptionArgs,

    /// Debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate once and print the result
    Generate {
        /// Experience: message, quote or both
        #[arg(short, long, default_value = "message", value_parser = parse_mode)]
        mode: Mode,

        /// How you feel right now
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Interactive session (default)
    Session {
        /// Starting experience: message, quote or both
        #[arg(short, long, default_value = "message", value_parser = parse_mode)]
        mode: Mode,
    },

    /// Print the emotion profile of some text as JSON
    Analyze {
        #[arg(required = true)]
        text: Vec<String>,
    },
}

/// Generation options; unset flags keep the config file / built-in values
#[derive(Args)]
struct OptionArgs {
    /// Model name (gemini-2.5-flash, gemini-1.5-flash, gemini-1.5-pro)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Response style
    #[arg(long, global = true, value_parser = parse_tone)]
    tone: Option<Tone>,

    /// Response length
    #[arg(long, global = true, value_parser = parse_length)]
    length: Option<ResponseLength>,

    /// Number of quotes (3-10)
    #[arg(long, global = true)]
    quotes: Option<u8>,

    /// Creativity level (0.1-1.0)
    #[arg(long, global = true)]
    creativity: Option<f32>,

    /// Detail level (1-5)
    #[arg(long, global = true)]
    detail: Option<u8>,

    /// Personalization depth (1-5)
    #[arg(long, global = true)]
    personalization: Option<u8>,

    #[arg(long, global = true)]
    no_steps: bool,

    #[arg(long, global = true)]
    no_message_quotes: bool,

    #[arg(long, global = true)]
    no_reflection: bool,

    #[arg(long, global = true)]
    no_affirmation: bool,

    /// Mark playback for automatic speech
    #[arg(long, global = true)]
    auto_speak: bool,
}

impl OptionArgs {
    fn apply(&self, mut options: GenerationOptions) -> GenerationOptions {
        if let Some(model) = &self.model {
            options.model = model.clone();
        }
        if let Some(tone) = self.tone {
            options.tone = tone;
        }
        if let Some(length) = self.length {
            options.length = length;
        }
        if let Some(n) = self.quotes {
            options.num_quotes = n;
        }
        if let Some(c) = self.creativity {
            options.creativity = c;
        }
        if let Some(d) = self.detail {
            options.detail_level = d;
        }
        if let Some(p) = self.personalization {
            options.personalization = p;
        }
        options.include_steps &= !self.no_steps;
        options.include_quotes_in_message &= !self.no_message_quotes;
        options.include_reflection_questions &= !self.no_reflection;
        options.include_daily_affirmation &= !self.no_affirmation;
        options.auto_speak |= self.auto_speak;
        options.normalized()
    }
}

fn parse_mode(s: &str) -> std::result::Result<Mode, String> {
    Mode::from_str(s).ok_or_else(|| format!("unknown mode '{}' (message, quote, both)", s))
}

fn parse_tone(s: &str) -> std::result::Result<Tone, String> {
    Tone::from_str(s).ok_or_else(|| {
        let names: Vec<&str> = Tone::ALL.iter().map(|t| t.as_str()).collect();
        format!("unknown tone '{}' ({})", s, names.join(", "))
    })
}

fn parse_length(s: &str) -> std::result::Result<ResponseLength, String> {
    ResponseLength::from_str(s).ok_or_else(|| {
        format!(
            "unknown length '{}' (concise, detailed, comprehensive, extensive)",
            s
        )
    })
}

/// Credential, file defaults and flags combined into a ready pipeline
fn build_motivator(args: &OptionArgs) -> Result<Motivator> {
    let env = EnvConfig::from_env()?;
    let file = FileConfig::load();

    let base = GenerationOptions {
        model: env.model.clone(),
        ..Default::default()
    };
    let options = args.apply(file.apply_defaults(base));
    debug!(?options, "Resolved generation options");

    let client = GeminiClient::from_config(&env);
    Ok(Motivator::new(Arc::new(client), options, file.temperature))
}

async fn run_generate(args: &OptionArgs, mode: Mode, text: &[String]) -> Result<()> {
    let motivator = build_motivator(args)?;
    let presenter = Presenter::new(motivator.options(), color_enabled());
    let mut session = SessionState::new(mode);
    let user_text = text.join(" ");

    match motivator.generate(&mut session, &user_text, mode).await {
        Ok(result) => {
            println!("{}", presenter.render(result, mode));
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", presenter.error_line(&e));
            std::process::exit(1);
        }
    }
}

async fn run_session(args: &OptionArgs, mode: Mode) -> Result<()> {
    let motivator = build_motivator(args)?;
    let presenter = Presenter::new(motivator.options(), color_enabled());
    let mut session = SessionState::new(mode);

    println!("{}", presenter.welcome());
    println!("\n{}\n", HELP_TEXT);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("[{}]> ", session.mode);
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        match SessionCommand::parse(&line) {
            SessionCommand::Input(text) => {
                let mode = session.mode;
                match motivator.generate(&mut session, &text, mode).await {
                    Ok(result) => println!("\n{}\n", presenter.render(result, mode)),
                    Err(e) => eprintln!("{}", presenter.error_line(&e)),
                }
                if session.debug
                    && let Some(profile) = &session.last_profile
                {
                    println!("{}\n", presenter.debug_info(profile));
                }
            }
            SessionCommand::SetMode(mode) => {
                session.mode = mode;
                println!("Mode: {}", mode);
            }
            SessionCommand::Clear => {
                session.clear();
                println!("{}", presenter.welcome());
            }
            SessionCommand::ToggleDebug => {
                session.debug = !session.debug;
                println!("Debug info {}", if session.debug { "on" } else { "off" });
            }
            SessionCommand::Show => match session.current_view() {
                Some((result, mode)) => println!("\n{}\n", presenter.render(result, mode)),
                None => println!("{}", presenter.welcome()),
            },
            SessionCommand::Examples => println!("{}", presenter.welcome()),
            SessionCommand::Help => println!("{}", HELP_TEXT),
            SessionCommand::Quit => break,
            SessionCommand::Invalid(hint) => eprintln!("{}", hint),
        }
    }

    debug!(
        inputs = session.history.len(),
        responses = session.history.total_entries(),
        "Session ended"
    );
    Ok(())
}

fn run_analyze(text: &[String]) -> Result<()> {
    let profile = analyze(&text.join(" "));
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        log_level_from_env().unwrap_or(Level::WARN)
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        None => run_session(&cli.options, Mode::default()).await?,
        Some(Commands::Session { mode }) => run_session(&cli.options, mode).await?,
        Some(Commands::Generate { mode, text }) => run_generate(&cli.options, mode, &text).await?,
        Some(Commands::Analyze { text }) => run_analyze(&text)?,
    }

    Ok(())
}
