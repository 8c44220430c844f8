//! Backend implementations of the [`TextGenerator`](super::provider::TextGenerator) trait

pub mod huggingface;
pub mod ollama;

pub use huggingface::HuggingFaceGenerator;
pub use ollama::OllamaGenerator;
