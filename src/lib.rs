// src/lib.rs
// Motivator - personalized motivation and quotes from a generative model

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod emotion;
pub mod error;
pub mod llm;
pub mod present;
pub mod prompt;
pub mod response;
pub mod session;

pub use error::{MotivatorError, Result};
