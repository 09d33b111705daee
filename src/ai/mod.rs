//! AI-assisted configuration: prompts, the completion seam and response parsing

pub mod prompt;
pub mod response;
#[cfg(all(feature = "http", not(target_arch = "wasm32")))]
pub mod client;

pub use prompt::{generation_prompt, regeneration_prompt};
pub use response::{parse_response, AiConfiguration, AiFile};
#[cfg(all(feature = "http", not(target_arch = "wasm32")))]
pub use client::HttpCompletionClient;

use crate::models::GeneratorError;
use serde_json::Value;

/// Text in, JSON out. The wire protocol behind it is opaque.
#[allow(async_fn_in_trait)]
pub trait CompletionBackend {
    async fn complete(&self, prompt: &str) -> Result<Value, GeneratorError>;
}
