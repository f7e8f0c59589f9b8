// src/llm/mod.rs
// Generation client: Gemini over HTTP plus the temperature formula

mod gemini;
pub mod http_client;
mod logging;
pub mod provider;
pub mod temperature;

pub use gemini::GeminiClient;
pub use http_client::{LlmHttpClient, create_shared_client};
pub use provider::{GenerationOutput, GenerationRequest, TextGenerator, Usage};
pub use temperature::{TemperatureTunables, input_variance};
