use reqwest::Client;
use std::error::Error;
use std::fmt;
use std::time::Duration;

use super::endpoints::{
    ChatCompletionRequest, ChatCompletionResponse, DEFAULT_MODEL, GROQ_CHAT_COMPLETIONS_URL,
};

const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug)]
pub enum ApiConnectionError {
    MissingApiKey,
    NetworkError(reqwest::Error),
    ApiError {
        status: reqwest::StatusCode,
        error_body: String,
    },
    EmptyResponse,
}

impl fmt::Display for ApiConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiConnectionError::MissingApiKey => {
                write!(f, "No API key configured for the completion backend")
            }
            ApiConnectionError::NetworkError(err) => write!(f, "Network error: {}", err),
            ApiConnectionError::ApiError { status, error_body } => {
                write!(f, "API error {}: {}", status, error_body)
            }
            ApiConnectionError::EmptyResponse => {
                write!(f, "Backend returned no completion choices")
            }
        }
    }
}

impl Error for ApiConnectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiConnectionError::NetworkError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiConnectionError {
    fn from(err: reqwest::Error) -> Self {
        ApiConnectionError::NetworkError(err)
    }
}

/// Completion transport. The credential is injected at construction; the
/// transport itself never consults the process environment.
#[derive(Debug, Clone)]
pub enum Provider {
    Groq {
        api_key: Option<String>,
        model: String,
    },
}

impl Provider {
    pub fn groq(api_key: Option<String>) -> Self {
        Self::Groq {
            api_key,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn groq_with_model(api_key: Option<String>, model: &str) -> Self {
        Self::Groq {
            api_key,
            model: model.to_string(),
        }
    }

    pub fn model(&self) -> &str {
        match self {
            Provider::Groq { model, .. } => model,
        }
    }

    /// Performs exactly one outbound call per invocation. No retries and no
    /// caching: the backend may vary its answer for identical inputs.
    pub async fn call_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ApiConnectionError> {
        match self {
            Provider::Groq { api_key, .. } => {
                let key = match api_key.as_deref() {
                    Some(k) if !k.trim().is_empty() => k,
                    _ => return Err(ApiConnectionError::MissingApiKey),
                };

                let client = Client::builder()
                    .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                    .build()
                    .unwrap_or_default();

                let response = client
                    .post(GROQ_CHAT_COMPLETIONS_URL)
                    .bearer_auth(key)
                    .header("Content-Type", "application/json")
                    .json(&request)
                    .send()
                    .await?;

                if response.status().is_success() {
                    let chat_response = response.json::<ChatCompletionResponse>().await?;
                    if chat_response.choices.is_empty() {
                        return Err(ApiConnectionError::EmptyResponse);
                    }
                    Ok(chat_response)
                } else {
                    let status = response.status();
                    let error_body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Failed to read error body".to_string());
                    Err(ApiConnectionError::ApiError { status, error_body })
                }
            }
        }
    }
}
