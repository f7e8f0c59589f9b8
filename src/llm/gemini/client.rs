// src/llm/gemini/client.rs
// Google Gemini generateContent client (non-streaming, single attempt)

use crate::config::{DEFAULT_API_BASE, EnvConfig};
use crate::error::{MotivatorError, Result};
use crate::llm::gemini::extraction::{extract_usage, finish_reason, first_candidate_text};
use crate::llm::gemini::types::{GeminiContent, GeminiRequest, GeminiResponse, GenerationConfig};
use crate::llm::http_client::LlmHttpClient;
use crate::llm::logging::{log_completion, log_usage};
use crate::llm::provider::{GenerationOutput, GenerationRequest, TextGenerator};
use async_trait::async_trait;
use std::time::Instant;
use tracing::{Span, debug, info, instrument};
use uuid::Uuid;

/// Google Gemini API client
pub struct GeminiClient {
    api_key: String,
    api_base: String,
    http: LlmHttpClient,
}

impl GeminiClient {
    /// Create a new Gemini client against the public endpoint
    pub fn new(api_key: String) -> Self {
        Self::with_base(api_key, DEFAULT_API_BASE.to_string())
    }

    /// Create a client against a custom endpoint base
    pub fn with_base(api_key: String, api_base: String) -> Self {
        Self::with_http_client(api_key, api_base, LlmHttpClient::new())
    }

    pub fn with_http_client(api_key: String, api_base: String, http: LlmHttpClient) -> Self {
        Self {
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn from_config(config: &EnvConfig) -> Self {
        Self::with_base(config.api_key.clone(), config.api_base.clone())
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/{}:generateContent", self.api_base, model)
    }

    fn build_request(request: &GenerationRequest) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent::user_text(request.instruction.clone())],
            generation_config: GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_output_tokens,
                candidate_count: request.candidate_count,
                top_p: request.top_p,
                top_k: request.top_k,
            },
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &'static str {
        "Gemini"
    }

    #[instrument(skip(self, request), fields(request_id, model = %request.model))]
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationOutput> {
        let request_id = Uuid::new_v4().to_string();
        let start_time = Instant::now();

        Span::current().record("request_id", &request_id);

        info!(
            request_id = %request_id,
            model = %request.model,
            temperature = request.temperature,
            prompt_len = request.instruction.len(),
            "Starting Gemini generateContent request"
        );

        let body = serde_json::to_string(&Self::build_request(request))?;
        debug!(request_id = %request_id, "Gemini request: {}", body);

        let url = self.endpoint(&request.model);
        let response_body = self
            .http
            .execute_request(&request_id, body, |client, body| {
                client
                    .post(&url)
                    .header("Content-Type", "application/json")
                    .header("x-goog-api-key", &self.api_key)
                    .body(body)
            })
            .await?;

        let duration_ms = start_time.elapsed().as_millis() as u64;

        let data: GeminiResponse = serde_json::from_str(&response_body).map_err(|e| {
            MotivatorError::Generation(format!("Failed to parse Gemini response: {}", e))
        })?;

        if let Some(error) = &data.error {
            return Err(MotivatorError::Generation(format!(
                "Gemini error: {}",
                error.describe()
            )));
        }

        if let Some(reason) = finish_reason(&data) {
            debug!(request_id = %request_id, finish_reason = reason, "Gemini candidate finished");
        }

        let text = first_candidate_text(&data);
        let usage = extract_usage(&data);

        if let Some(ref u) = usage {
            log_usage(&request_id, self.name(), u);
        }
        log_completion(&request_id, self.name(), duration_ms, text.len());

        Ok(GenerationOutput {
            request_id,
            text,
            usage,
            duration_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // Construction tests
    // ============================================================================

    #[test]
    fn test_api_base() {
        assert!(DEFAULT_API_BASE.contains("googleapis.com"));
    }

    #[test]
    fn test_endpoint_format() {
        let client = GeminiClient::with_base("k".into(), "http://localhost:8080/models/".into());
        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "http://localhost:8080/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_build_request_carries_sampling() {
        let req = GenerationRequest::new("be kind", "gemini-2.5-flash", 0.77);
        let wire = GeminiClient::build_request(&req);
        assert_eq!(wire.contents.len(), 1);
        assert_eq!(wire.contents[0].parts[0].text.as_deref(), Some("be kind"));
        assert!((wire.generation_config.temperature - 0.77).abs() < f32::EPSILON);
        assert_eq!(wire.generation_config.max_output_tokens, 2500);
        assert_eq!(wire.generation_config.top_k, 40);
    }

    // ============================================================================
    // Failure tests
    // ============================================================================

    #[tokio::test]
    async fn test_unreachable_endpoint_is_generation_error() {
        let client = GeminiClient::with_base("k".into(), "http://127.0.0.1:1".into());
        let req = GenerationRequest::new("hello", "gemini-2.5-flash", 0.8);
        let err = client.generate(&req).await.unwrap_err();
        assert!(matches!(err, MotivatorError::Generation(_)));
    }
}
