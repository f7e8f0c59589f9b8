// src/response/mod.rs
// Response parsing: extraction strategies, fallback synthesis, history

pub mod fallback;
pub mod history;
pub mod parser;
pub mod strategies;
pub mod text;
pub mod types;

pub use history::{HistoryEntry, ResponseHistory, context_hash};
pub use parser::ResponseParser;
pub use strategies::{BraceSpan, FencedBlock, ParseStrategy, StrictJson};
pub use text::truncate_chars;
pub use types::{MessageResult, Mode, QuoteItem, QuoteResult, ResultKind, ResultObject};
