use crate::constants::{endpoints, env_vars};
use crate::llm::provider::{
    GeneratedResponse, GenerationConfig, GenerationError, InitializationError, TextGenerator,
};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::{Value, json};

/// Hosted Hugging Face Inference API backend.
///
/// The API already returns `generated_text` with the prompt included as a
/// prefix, so responses are kept verbatim.
pub struct HuggingFaceGenerator {
    http_client: HttpClient,
    model: String,
    inference_url: String,
    hub_api_url: String,
    api_token: Option<String>,
}

impl HuggingFaceGenerator {
    pub fn new(model: String, base_url: Option<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            model,
            inference_url: base_url
                .unwrap_or_else(|| endpoints::HUGGINGFACE_INFERENCE_URL.to_string()),
            hub_api_url: endpoints::HUGGINGFACE_HUB_API_URL.to_string(),
            api_token: std::env::var(env_vars::HF_API_TOKEN).ok(),
        }
    }

    fn build_request_body(&self, prompt: &str, config: &GenerationConfig) -> Value {
        json!({
            "inputs": prompt,
            "parameters": {
                "max_length": config.max_length,
                "num_return_sequences": config.num_return_sequences,
                "do_sample": true,
            },
            "options": {
                "wait_for_model": true,
            }
        })
    }

    fn parse_generation_response(&self, body: Value) -> Result<GeneratedResponse, GenerationError> {
        // Error bodies come back as an object with an "error" key even on 200
        if let Some(error) = body.get("error").and_then(Value::as_str) {
            return Err(GenerationError::Backend(error.to_string()));
        }

        let samples = body.as_array().ok_or_else(|| {
            GenerationError::MalformedResponse("expected a JSON array of samples".to_string())
        })?;

        let texts = samples
            .iter()
            .map(|sample| {
                sample
                    .get("generated_text")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .ok_or_else(|| {
                        GenerationError::MalformedResponse(
                            "sample is missing 'generated_text'".to_string(),
                        )
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GeneratedResponse::new(texts))
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceGenerator {
    fn name(&self) -> &str {
        "huggingface"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn verify(&self) -> Result<(), InitializationError> {
        let url = format!("{}/{}", self.hub_api_url, self.model);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| InitializationError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(InitializationError::ModelUnavailable {
                model: self.model.clone(),
                reason: format!("model hub returned HTTP {}", response.status()),
            });
        }

        Ok(())
    }

    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<GeneratedResponse, GenerationError> {
        let url = format!("{}/{}", self.inference_url, self.model);
        let body = self.build_request_body(prompt, config);

        let mut request = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body);

        if let Some(token) = &self.api_token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let response = request
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

        self.parse_generation_response(response_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> HuggingFaceGenerator {
        HuggingFaceGenerator::new("gpt2".to_string(), None)
    }

    #[test]
    fn parses_samples_and_keeps_prompt_prefix() {
        let body = json!([
            {"generated_text": "Once upon a time there was a fox."},
            {"generated_text": "Once upon a time the rain fell."},
        ]);

        let response = generator()
            .parse_generation_response(body)
            .expect("valid body should parse");

        assert_eq!(response.texts.len(), 2);
        assert!(response.texts[0].starts_with("Once upon a time"));
        assert!(response.texts[1].starts_with("Once upon a time"));
    }

    #[test]
    fn error_body_maps_to_backend_error() {
        let body = json!({"error": "Model gpt2 is currently loading"});

        let err = generator()
            .parse_generation_response(body)
            .expect_err("error body should fail");

        assert!(matches!(err, GenerationError::Backend(_)));
        assert!(err.to_string().contains("currently loading"));
    }

    #[test]
    fn non_array_body_is_malformed() {
        let err = generator()
            .parse_generation_response(json!({"generated_text": "not wrapped in a list"}))
            .expect_err("object body should fail");

        assert!(matches!(err, GenerationError::MalformedResponse(_)));
    }

    #[test]
    fn sample_without_generated_text_is_malformed() {
        let err = generator()
            .parse_generation_response(json!([{"score": 0.5}]))
            .expect_err("sample without text should fail");

        assert!(matches!(err, GenerationError::MalformedResponse(_)));
    }

    #[test]
    fn request_body_carries_generation_parameters() {
        let config = GenerationConfig {
            max_length: 64,
            num_return_sequences: 2,
        };
        let body = generator().build_request_body("Write a haiku.", &config);

        assert_eq!(body["inputs"], "Write a haiku.");
        assert_eq!(body["parameters"]["max_length"], 64);
        assert_eq!(body["parameters"]["num_return_sequences"], 2);
        assert_eq!(body["options"]["wait_for_model"], true);
    }
}
