//! Promptgen Core Library
//!
//! This crate provides the core functionality for the promptgen CLI:
//! the questionnaire-driven prompt builder, the model gateway over
//! external text-generation backends, prompt persistence, and
//! configuration loading.

// Public modules
pub mod config;
pub mod constants;
pub mod llm;
pub mod prompts;
pub mod storage;

// Re-exports for convenience
pub use config::PromptgenConfig;
pub use llm::{
    GeneratedResponse, GenerationConfig, GenerationError, InitializationError, TextGenerator,
    create_generator,
};
pub use prompts::{QuestionnaireAnswers, build_prompt};
pub use storage::{StorageError, load_prompt, save_prompt};
