// src/llm/gemini/extraction.rs
// Response extraction helpers for Gemini API responses

use crate::llm::gemini::types::{GeminiContent, GeminiResponse};
use crate::llm::provider::Usage;

/// Extract text content from Gemini response (non-thought parts only)
pub fn extract_content(content: &GeminiContent) -> Option<String> {
    let text_parts: Vec<&str> = content
        .parts
        .iter()
        .filter(|part| !part.thought)
        .filter_map(|part| part.text.as_deref())
        .collect();

    if text_parts.is_empty() {
        None
    } else {
        Some(text_parts.join(""))
    }
}

/// Text of the first candidate, trimmed; empty when there is none
pub fn first_candidate_text(response: &GeminiResponse) -> String {
    response
        .candidates
        .as_ref()
        .and_then(|c| c.first())
        .and_then(|candidate| candidate.content.as_ref())
        .and_then(extract_content)
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

/// Why the first candidate stopped (STOP, MAX_TOKENS, SAFETY, ...)
pub fn finish_reason(response: &GeminiResponse) -> Option<&str> {
    response
        .candidates
        .as_ref()
        .and_then(|c| c.first())
        .and_then(|candidate| candidate.finish_reason.as_deref())
}

/// Convert usage (Gemini uses different field names)
pub fn extract_usage(response: &GeminiResponse) -> Option<Usage> {
    response.usage_metadata.as_ref().map(|u| {
        let prompt_tokens = u.prompt_token_count.unwrap_or(0);
        let completion_tokens = u.candidates_token_count.unwrap_or(0);
        Usage {
            prompt_tokens,
            completion_tokens,
            total_tokens: u
                .total_token_count
                .unwrap_or(prompt_tokens + completion_tokens),
        }
    })
}
