//! Text-generation capability abstraction
//!
//! The concrete backend (hosted Hugging Face inference, local Ollama) sits
//! behind the [`TextGenerator`] trait so it can be swapped or mocked in tests
//! without a real model loaded.
//!
//! Prompt-prefix convention: every string in a [`GeneratedResponse`] contains
//! the original prompt as a prefix, matching the `generated_text` convention
//! of transformers-style pipelines. Backends that return only the
//! continuation normalize by prepending the prompt.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::constants::defaults;

/// Parameters for one generation call, fixed for the process lifetime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Maximum length of each generated sample
    pub max_length: u32,

    /// Number of samples to return
    pub num_return_sequences: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_length: defaults::DEFAULT_MAX_LENGTH,
            num_return_sequences: defaults::DEFAULT_NUM_RETURN_SEQUENCES,
        }
    }
}

/// Ordered set of continuations produced for a single prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedResponse {
    pub texts: Vec<String>,
}

impl GeneratedResponse {
    pub fn new(texts: Vec<String>) -> Self {
        Self { texts }
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// Narrow capability trait over an external text-generation backend
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Backend name (e.g. "huggingface", "ollama")
    fn name(&self) -> &str;

    /// Model identifier this generator was created for
    fn model(&self) -> &str;

    /// Check that the backend is reachable and the model is available.
    ///
    /// Called once at startup; a failure here is the one fatal condition
    /// in the system.
    async fn verify(&self) -> Result<(), InitializationError>;

    /// Submit a prompt and return the produced continuations.
    ///
    /// A failure here is recoverable: the caller logs it and the turn
    /// simply yields no output. No retries, no caching.
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<GeneratedResponse, GenerationError>;
}

/// Fatal startup failures: the process cannot proceed without a working model
#[derive(Debug, thiserror::Error)]
pub enum InitializationError {
    #[error("unknown backend '{0}' (expected 'huggingface' or 'ollama')")]
    UnknownBackend(String),
    #[error("model '{model}' is not available: {reason}")]
    ModelUnavailable { model: String, reason: String },
    #[error("network error while contacting the backend: {0}")]
    Network(String),
}

/// Recoverable per-call failures: logged, then the interactive loop continues
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("network error: {0}")]
    Network(String),
    #[error("backend error: {0}")]
    Backend(String),
    #[error("malformed response from backend: {0}")]
    MalformedResponse(String),
}
