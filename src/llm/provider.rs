// src/llm/provider.rs
// Text generation abstraction and the fixed sampling parameters

use crate::error::Result;
use async_trait::async_trait;

/// Output token budget for every request
pub const MAX_OUTPUT_TOKENS: u32 = 2500;
/// Single candidate per request
pub const CANDIDATE_COUNT: u32 = 1;
/// Nucleus sampling
pub const TOP_P: f32 = 0.95;
pub const TOP_K: u32 = 40;

/// One request to the generation endpoint; built per user action, then dropped
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub instruction: String,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub candidate_count: u32,
    pub top_p: f32,
    pub top_k: u32,
}

impl GenerationRequest {
    pub fn new(instruction: impl Into<String>, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            instruction: instruction.into(),
            model: model.into(),
            temperature,
            max_output_tokens: MAX_OUTPUT_TOKENS,
            candidate_count: CANDIDATE_COUNT,
            top_p: TOP_P,
            top_k: TOP_K,
        }
    }
}

/// Token usage reported by the endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Raw generation result
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutput {
    pub request_id: String,
    /// Raw text payload; may be empty
    pub text: String,
    pub usage: Option<Usage>,
    pub duration_ms: u64,
}

/// Anything that can turn an instruction into raw text.
///
/// Implementations make exactly one attempt; failures surface as
/// `MotivatorError::Generation` and are never retried.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationOutput>;

    /// Provider name for logs
    fn name(&self) -> &'static str;
}
