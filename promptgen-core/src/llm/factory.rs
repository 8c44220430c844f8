//! Backend selection and one-time generator initialization

use super::provider::{InitializationError, TextGenerator};
use super::providers::{HuggingFaceGenerator, OllamaGenerator};
use std::str::FromStr;
use tracing::info;

/// Supported generation backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    HuggingFace,
    Ollama,
}

impl FromStr for BackendKind {
    type Err = InitializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "huggingface" | "hf" => Ok(Self::HuggingFace),
            "ollama" => Ok(Self::Ollama),
            other => Err(InitializationError::UnknownBackend(other.to_string())),
        }
    }
}

/// Create a generator for the named backend and verify it is usable.
///
/// This is the single fatal path in the system: any failure here means the
/// process cannot proceed.
pub async fn create_generator(
    backend: &str,
    model: &str,
    base_url: Option<String>,
) -> Result<Box<dyn TextGenerator>, InitializationError> {
    let kind = BackendKind::from_str(backend)?;

    info!("loading model '{model}' via {backend} backend");

    let generator: Box<dyn TextGenerator> = match kind {
        BackendKind::HuggingFace => Box::new(HuggingFaceGenerator::new(model.to_string(), base_url)),
        BackendKind::Ollama => Box::new(OllamaGenerator::new(model.to_string(), base_url)),
    };

    generator.verify().await?;
    info!("model loaded successfully");

    Ok(generator)
}
