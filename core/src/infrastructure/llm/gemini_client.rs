use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    generation::{
        entities::{ChatMessage, ChatRole},
        ports::LLMClient,
    },
};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&'static str>, text: String) -> Self {
        Self {
            role,
            parts: vec![Part { text }],
        }
    }
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

/// Gemini's conversation roles: the assistant is `model`, everything else is `user`.
fn gemini_role(role: ChatRole) -> &'static str {
    match role {
        ChatRole::Assistant => "model",
        _ => "user",
    }
}

fn status_error(status: StatusCode, body: String) -> CoreError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        CoreError::RateLimited(format!("LLM API rate limited: {}", body))
    } else {
        CoreError::ExternalServiceError(format!("LLM API returned error: {} - {}", status, body))
    }
}

impl GeminiLLMClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn call_gemini_api(&self, model: &str, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!("{}/{}:generateContent", self.base_url, model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(model, "Gemini API error: {} - {}", status, error_text);
            return Err(status_error(status, error_text));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .filter(|text| !text.is_empty())
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_text(
        &self,
        model: String,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content::text(None, prompt)],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
        };

        self.call_gemini_api(&model, request).await
    }

    async fn chat(
        &self,
        model: String,
        system_instruction: String,
        messages: Vec<ChatMessage>,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: messages
                .into_iter()
                .map(|m| Content::text(Some(gemini_role(m.role)), m.content))
                .collect(),
            system_instruction: Some(Content::text(None, system_instruction)),
            generation_config: None,
        };

        self.call_gemini_api(&model, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_roles_map_to_gemini() {
        assert_eq!(gemini_role(ChatRole::Assistant), "model");
        assert_eq!(gemini_role(ChatRole::User), "user");
        assert_eq!(gemini_role(ChatRole::Other), "user");
    }

    #[test]
    fn test_too_many_requests_is_rate_limited() {
        let err = status_error(StatusCode::TOO_MANY_REQUESTS, "quota".to_string());
        assert!(err.is_retryable());

        let err = status_error(StatusCode::BAD_REQUEST, "bad key".to_string());
        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GeminiRequest {
            contents: vec![Content::text(Some("user"), "Hi".to_string())],
            system_instruction: Some(Content::text(None, "Be brief".to_string())),
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: serde_json::json!({"type": "ARRAY"}),
            }),
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "Be brief");
        assert!(json["systemInstruction"].get("role").is_none());
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
    }
}
