//! `OpenAI` and `OpenAI`-compatible chat completions provider

use super::types::{LlmRequest, LlmResponse, Usage};
use super::{LlmError, LlmService, REQUEST_TIMEOUT};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAIService {
    client: Client,
    api_key: String,
    api_name: String,
    endpoint: String,
}

impl OpenAIService {
    /// `base_url` overrides the API root (for gateways and compatible
    /// servers), e.g. `http://localhost:11434/v1`
    pub fn new(api_key: String, api_name: &str, base_url: Option<&str>) -> Result<Self, LlmError> {
        let root = base_url.unwrap_or(DEFAULT_BASE_URL).trim_end_matches('/');
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| LlmError::unknown(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            api_name: api_name.to_string(),
            endpoint: format!("{root}/chat/completions"),
        })
    }

    fn translate_request(&self, request: &LlmRequest) -> ChatRequest {
        let system = request.system.iter().map(|text| ChatMessage {
            role: "system".to_string(),
            content: text.clone(),
        });
        let turns = request.messages.iter().map(|m| ChatMessage {
            role: m.role.as_str().to_string(),
            content: m.text.clone(),
        });

        ChatRequest {
            model: self.api_name.clone(),
            messages: system.chain(turns).collect(),
            max_tokens: request.max_tokens,
        }
    }

    fn normalize_response(resp: ChatResponse) -> Result<LlmResponse, LlmError> {
        let text = resp
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::unknown("Response contained no choices"))?;

        let usage = resp.usage.map_or_else(Usage::default, |u| Usage {
            input_tokens: u.prompt_tokens,
            output_tokens: u.completion_tokens,
        });

        Ok(LlmResponse {
            text: text.trim().to_string(),
            usage,
        })
    }
}

#[async_trait]
impl LlmService for OpenAIService {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        let body = self.translate_request(request);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::from_transport(&e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map_or(text, |parsed| parsed.error.message);
            return Err(LlmError::from_status(status.as_u16(), &message));
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| LlmError::unknown(format!("Failed to parse response: {e} - body: {text}")))?;

        Self::normalize_response(parsed)
    }

    fn model_id(&self) -> &str {
        &self.api_name
    }
}

// OpenAI API types

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::LlmErrorKind;

    fn service() -> OpenAIService {
        OpenAIService::new("key".to_string(), "gpt-4o-mini", Some("http://localhost:9/v1/")).unwrap()
    }

    #[test]
    fn test_endpoint_from_base_url() {
        assert_eq!(service().endpoint, "http://localhost:9/v1/chat/completions");
        let direct = OpenAIService::new("key".to_string(), "gpt-4o-mini", None).unwrap();
        assert_eq!(direct.endpoint, "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn test_system_prompt_comes_first() {
        let request = LlmRequest::prompt(Some("be kind"), "hi").with_max_tokens(50);
        let body = serde_json::to_value(service().translate_request(&request)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "model": "gpt-4o-mini",
                "messages": [
                    { "role": "system", "content": "be kind" },
                    { "role": "user", "content": "hi" }
                ],
                "max_tokens": 50
            })
        );
    }

    #[test]
    fn test_normalize_response() {
        let parsed: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"  You seem calm. \n"}}],
                "usage":{"prompt_tokens":12,"completion_tokens":7}}"#,
        )
        .unwrap();
        let response = OpenAIService::normalize_response(parsed).unwrap();
        assert_eq!(response.text, "You seem calm.");
        assert_eq!(response.usage.input_tokens, 12);
        assert_eq!(response.usage.output_tokens, 7);
    }

    #[test]
    fn test_empty_choices_is_error() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        let err = OpenAIService::normalize_response(parsed).unwrap_err();
        assert_eq!(err.kind, LlmErrorKind::Unknown);
    }
}
