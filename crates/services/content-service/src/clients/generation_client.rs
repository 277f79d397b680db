//! Client for a Gemini-style `generateContent` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use common::{AppError, AppResult, GenerationConfig};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Text completion backend
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a prompt and return the reply text
    async fn generate_text(&self, prompt: &str) -> AppResult<String>;
}

pub struct GeminiClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
    temperature: f32,
    top_p: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationSettings,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationSettings {
    temperature: f32,
    top_p: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

impl GeminiClient {
    /// Build from config, or `None` without an API key.
    pub fn from_config(config: &GenerationConfig, client: Client) -> Option<Self> {
        let api_key = config.api_key.clone()?;

        Some(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            temperature: config.temperature,
            top_p: config.top_p,
            max_output_tokens: config.max_output_tokens,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    fn request_body<'a>(&self, prompt: &'a str) -> GenerateRequest<'a> {
        GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationSettings {
                temperature: self.temperature,
                top_p: self.top_p,
                max_output_tokens: self.max_output_tokens,
            },
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> AppResult<String> {
        tracing::debug!(model = %self.model, "Requesting content generation");

        let response = self
            .client
            .post(self.request_url())
            .query(&[("key", self.api_key.as_str())])
            .json(&self.request_body(prompt))
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| AppError::upstream(format!("generation request failed: {}", e)))?;

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AppError::upstream(format!("generation response unreadable: {}", e)))?;

        body.into_text()
            .ok_or_else(|| AppError::upstream("generation response contained no text"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> GeminiClient {
        let config = GenerationConfig {
            api_key: Some("test-key".into()),
            ..GenerationConfig::default()
        };
        GeminiClient::from_config(&config, Client::new()).unwrap()
    }

    #[test]
    fn test_disabled_without_api_key() {
        assert!(GeminiClient::from_config(&GenerationConfig::default(), Client::new()).is_none());
    }

    #[test]
    fn test_request_url() {
        assert_eq!(
            client().request_url(),
            "https://generativelanguage.googleapis.com/v1/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(client().request_body("Describe Pokhara")).unwrap();

        assert_eq!(body["contents"][0]["parts"][0]["text"], "Describe Pokhara");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 2048);
        assert!(body["generationConfig"]["topP"].is_number());
    }

    #[test]
    fn test_reply_text_extraction() {
        let reply: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "{\"title\":\"Pokhara\"}" }] } }]
        }))
        .unwrap();
        assert_eq!(reply.into_text().as_deref(), Some("{\"title\":\"Pokhara\"}"));

        let empty: GenerateResponse = serde_json::from_value(json!({ "candidates": [] })).unwrap();
        assert_eq!(empty.into_text(), None);
    }
}
