//! Configuration loading from promptgen.toml files.
//!
//! Values resolve in three layers: CLI flags override the config file,
//! and the config file overrides the built-in defaults. The file is
//! optional; a missing default config is not an error.

use crate::constants::defaults;
use crate::llm::provider::GenerationConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for promptgen
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PromptgenConfig {
    /// Model backend selection
    #[serde(default)]
    pub model: ModelConfig,

    /// Generation parameters
    #[serde(default)]
    pub generation: GenerationSection,
}

/// `[model]` section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Backend to route generation through ("huggingface" or "ollama")
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Model identifier understood by the backend
    #[serde(default = "default_model")]
    pub name: String,

    /// Override for the backend base URL (e.g. a self-hosted inference server)
    #[serde(default)]
    pub base_url: Option<String>,
}

/// `[generation]` section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationSection {
    /// Maximum length of each generated sample
    #[serde(default = "default_max_length")]
    pub max_length: u32,

    /// Number of samples requested per generation call
    #[serde(default = "default_num_return_sequences")]
    pub num_return_sequences: u32,
}

fn default_backend() -> String {
    defaults::DEFAULT_BACKEND.to_string()
}

fn default_model() -> String {
    defaults::DEFAULT_MODEL.to_string()
}

fn default_max_length() -> u32 {
    defaults::DEFAULT_MAX_LENGTH
}

fn default_num_return_sequences() -> u32 {
    defaults::DEFAULT_NUM_RETURN_SEQUENCES
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            name: default_model(),
            base_url: None,
        }
    }
}

impl Default for GenerationSection {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            num_return_sequences: default_num_return_sequences(),
        }
    }
}

impl PromptgenConfig {
    /// Load configuration from a specific file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load `promptgen.toml` from the current directory, falling back to
    /// defaults when the file does not exist.
    pub fn load_default() -> Result<Self> {
        let path = Path::new(defaults::CONFIG_FILE_NAME);
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Command-line overrides, all optional; `None` means the flag was not given
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub backend: Option<String>,
    pub model: Option<String>,
    pub max_length: Option<u32>,
    pub num_return_sequences: Option<u32>,
}

/// Settings after layering: CLI flags beat the config file, which beats
/// the built-in defaults (the file's serde defaults)
#[derive(Debug, Clone)]
pub struct ResolvedSettings {
    pub backend: String,
    pub model: String,
    pub base_url: Option<String>,
    pub generation: GenerationConfig,
}

pub fn resolve_settings(overrides: CliOverrides, file: PromptgenConfig) -> ResolvedSettings {
    ResolvedSettings {
        backend: overrides.backend.unwrap_or(file.model.backend),
        model: overrides.model.unwrap_or(file.model.name),
        base_url: file.model.base_url,
        generation: GenerationConfig {
            max_length: overrides.max_length.unwrap_or(file.generation.max_length),
            num_return_sequences: overrides
                .num_return_sequences
                .unwrap_or(file.generation.num_return_sequences),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = PromptgenConfig::default();
        assert_eq!(config.model.backend, "huggingface");
        assert_eq!(config.model.name, "gpt2");
        assert_eq!(config.generation.max_length, 200);
        assert_eq!(config.generation.num_return_sequences, 1);
        assert!(config.model.base_url.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: PromptgenConfig = toml::from_str(
            r#"
[generation]
max_length = 64
"#,
        )
        .expect("config should parse");
        assert_eq!(config.generation.max_length, 64);
        assert_eq!(config.generation.num_return_sequences, 1);
        assert_eq!(config.model.name, "gpt2");
    }

    #[test]
    fn full_file_overrides_everything() {
        let config: PromptgenConfig = toml::from_str(
            r#"
[model]
backend = "ollama"
name = "llama2"
base_url = "http://example.invalid:11434"

[generation]
max_length = 128
num_return_sequences = 3
"#,
        )
        .expect("config should parse");
        assert_eq!(config.model.backend, "ollama");
        assert_eq!(config.model.name, "llama2");
        assert_eq!(
            config.model.base_url.as_deref(),
            Some("http://example.invalid:11434")
        );
        assert_eq!(config.generation.max_length, 128);
        assert_eq!(config.generation.num_return_sequences, 3);
    }

    #[test]
    fn cli_flags_beat_file_values() {
        let file: PromptgenConfig = toml::from_str(
            r#"
[model]
backend = "ollama"
name = "llama2"

[generation]
max_length = 64
num_return_sequences = 2
"#,
        )
        .expect("config should parse");

        let settings = resolve_settings(
            CliOverrides {
                backend: Some("huggingface".to_string()),
                model: Some("distilgpt2".to_string()),
                max_length: Some(32),
                num_return_sequences: Some(4),
            },
            file,
        );

        assert_eq!(settings.backend, "huggingface");
        assert_eq!(settings.model, "distilgpt2");
        assert_eq!(settings.generation.max_length, 32);
        assert_eq!(settings.generation.num_return_sequences, 4);
    }

    #[test]
    fn absent_flags_fall_back_to_file_then_defaults() {
        let file: PromptgenConfig = toml::from_str(
            r#"
[generation]
max_length = 64
"#,
        )
        .expect("config should parse");

        let settings = resolve_settings(CliOverrides::default(), file);

        // file value wins over the default where present
        assert_eq!(settings.generation.max_length, 64);
        // untouched settings come from the defaults
        assert_eq!(settings.backend, "huggingface");
        assert_eq!(settings.model, "gpt2");
        assert_eq!(settings.generation.num_return_sequences, 1);
        assert!(settings.base_url.is_none());
    }
}
