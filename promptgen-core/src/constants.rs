/// Default configuration values shared between the CLI and the config file loader
pub mod defaults {
    pub const DEFAULT_BACKEND: &str = "huggingface";
    pub const DEFAULT_MODEL: &str = "gpt2";
    pub const DEFAULT_MAX_LENGTH: u32 = 200;
    pub const DEFAULT_NUM_RETURN_SEQUENCES: u32 = 1;

    /// File the interactive shell offers when saving or loading a prompt
    pub const DEFAULT_PROMPT_FILE: &str = "prompt.json";

    /// Config file looked up in the current directory when `--config` is absent
    pub const CONFIG_FILE_NAME: &str = "promptgen.toml";
}

/// Backend endpoint URLs to avoid hardcoding throughout the codebase
pub mod endpoints {
    pub const HUGGINGFACE_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";
    pub const HUGGINGFACE_HUB_API_URL: &str = "https://huggingface.co/api/models";
    pub const OLLAMA_BASE_URL: &str = "http://localhost:11434";
}

/// Environment variables read by the backends
pub mod env_vars {
    /// Optional bearer token for the Hugging Face Inference API
    pub const HF_API_TOKEN: &str = "HF_API_TOKEN";
}
