// src/response/history.rs
// Per-input response history, keyed by a short content hash

use crate::response::types::ResultObject;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// First 8 hex characters of the MD5 of the lower-cased, trimmed text
pub fn context_hash(user_text: &str) -> String {
    let normalized = user_text.trim().to_lowercase();
    let digest = md5::compute(normalized.as_bytes());
    let mut hex = format!("{:x}", digest);
    hex.truncate(8);
    hex
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub recorded_at: DateTime<Utc>,
    /// Whether a parse strategy succeeded (false means the fallback was used)
    pub parsed: bool,
    pub result: ResultObject,
}

/// Ordered list of prior results per input hash. Write-only for the pipeline.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResponseHistory {
    entries: BTreeMap<String, Vec<HistoryEntry>>,
}

impl ResponseHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result under the hash of `user_text`; returns the hash
    pub fn record(&mut self, user_text: &str, result: &ResultObject, parsed: bool) -> String {
        let hash = context_hash(user_text);
        self.entries.entry(hash.clone()).or_default().push(HistoryEntry {
            recorded_at: Utc::now(),
            parsed,
            result: result.clone(),
        });
        hash
    }

    pub fn entries(&self, hash: &str) -> &[HistoryEntry] {
        self.entries.get(hash).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn entries_for_text(&self, user_text: &str) -> &[HistoryEntry] {
        self.entries(&context_hash(user_text))
    }

    /// Number of distinct input hashes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_entries(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
