use crate::constants::endpoints;
use crate::llm::provider::{
    GeneratedResponse, GenerationConfig, GenerationError, InitializationError, TextGenerator,
};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::{Value, json};

/// Local Ollama backend.
///
/// Ollama returns only the continuation, so the prompt is prepended to each
/// sample to keep the gateway's prompt-prefix convention uniform across
/// backends. Ollama produces one completion per request; additional
/// sequences are obtained by repeating the call.
pub struct OllamaGenerator {
    http_client: HttpClient,
    model: String,
    base_url: String,
}

impl OllamaGenerator {
    pub fn new(model: String, base_url: Option<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            model,
            base_url: base_url.unwrap_or_else(|| endpoints::OLLAMA_BASE_URL.to_string()),
        }
    }

    fn build_request_body(&self, prompt: &str, config: &GenerationConfig) -> Value {
        json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
            "options": {
                "num_predict": config.max_length,
            }
        })
    }

    /// Prepend the prompt so samples match the gateway's prefix convention.
    fn normalize_sample(&self, prompt: &str, completion: &str) -> String {
        format!("{prompt}{completion}")
    }

    fn extract_completion(&self, body: &Value) -> Result<String, GenerationError> {
        if let Some(error) = body.get("error").and_then(Value::as_str) {
            return Err(GenerationError::Backend(error.to_string()));
        }

        body.get("response")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                GenerationError::MalformedResponse("response is missing 'response'".to_string())
            })
    }

    /// Check whether the named model is present in an `/api/tags` listing.
    /// Ollama model names carry an optional tag suffix (`llama2:13b`), so a
    /// bare request name matches any tag of that model.
    fn model_is_listed(&self, tags: &Value) -> bool {
        tags.get("models")
            .and_then(Value::as_array)
            .map(|models| {
                models.iter().any(|entry| {
                    entry
                        .get("name")
                        .and_then(Value::as_str)
                        .is_some_and(|name| {
                            name == self.model
                                || name
                                    .strip_suffix(":latest")
                                    .is_some_and(|base| base == self.model)
                                || name.starts_with(&format!("{}:", self.model))
                        })
                })
            })
            .unwrap_or(false)
    }
}

#[async_trait]
impl TextGenerator for OllamaGenerator {
    fn name(&self) -> &str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn verify(&self) -> Result<(), InitializationError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| InitializationError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(InitializationError::Network(format!(
                "Ollama returned HTTP {}",
                response.status()
            )));
        }

        let tags: Value = response
            .json()
            .await
            .map_err(|e| InitializationError::Network(e.to_string()))?;

        if !self.model_is_listed(&tags) {
            return Err(InitializationError::ModelUnavailable {
                model: self.model.clone(),
                reason: format!("not pulled locally; try `ollama pull {}`", self.model),
            });
        }

        Ok(())
    }

    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<GeneratedResponse, GenerationError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = self.build_request_body(prompt, config);

        let mut texts = Vec::with_capacity(config.num_return_sequences as usize);
        for _ in 0..config.num_return_sequences {
            let response = self
                .http_client
                .post(&url)
                .header("Content-Type", "application/json")
                .json(&body)
                .send()
                .await
                .map_err(|e| GenerationError::Network(e.to_string()))?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_default();
                return Err(GenerationError::Backend(format!(
                    "HTTP {status}: {error_text}"
                )));
            }

            let response_json: Value = response
                .json()
                .await
                .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

            let completion = self.extract_completion(&response_json)?;
            texts.push(self.normalize_sample(prompt, &completion));
        }

        Ok(GeneratedResponse::new(texts))
    }
}
