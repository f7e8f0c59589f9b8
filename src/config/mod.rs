// src/config/mod.rs
// Configuration: environment credential, preferences file, generation options

pub mod env;
pub mod file;
pub mod options;

pub use env::{DEFAULT_API_BASE, EnvConfig};
pub use file::FileConfig;
pub use options::{DEFAULT_MODEL, GenerationOptions, MODEL_CHOICES, ResponseLength, Tone};
