//! Model gateway: a unified interface over external text-generation backends

pub mod factory;
pub mod provider;
pub mod providers;

pub use factory::{BackendKind, create_generator};
pub use provider::{
    GeneratedResponse, GenerationConfig, GenerationError, InitializationError, TextGenerator,
};
