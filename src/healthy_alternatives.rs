use serde::{Deserialize, Serialize};

use crate::api_connection::connection::{ApiConnectionError, Provider};
use crate::api_connection::endpoints::{ChatCompletionRequest, ChatMessage};
use crate::assistant_error::AssistantError;
use crate::response_extractor::{extract, JsonShape};
use crate::result_validator::validate_alternatives;
use crate::tolerant_decoder::decode;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    pub name: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub nutrition_facts: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HealthyAlternatives {
    pub original: String,
    pub alternatives: Vec<Alternative>,
}

const ALTERNATIVES_SYSTEM_PROMPT: &str = r#"You are a nutrition expert. Provide healthy alternatives to the processed food item mentioned by the user. Respond with a JSON object containing:
{
  "original": "original food item",
  "alternatives": [
    {
      "name": "healthy alternative 1",
      "benefits": ["benefit 1", "benefit 2"],
      "nutritionFacts": "key nutrition facts"
    },
    {
      "name": "healthy alternative 2",
      "benefits": ["benefit 1", "benefit 2"],
      "nutritionFacts": "key nutrition facts"
    },
    {
      "name": "healthy alternative 3",
      "benefits": ["benefit 1", "benefit 2"],
      "nutritionFacts": "key nutrition facts"
    }
  ]
}
The JSON object must be the only content in your response. Do not include any explanatory text before or after it."#;

/// Suggests healthier substitutes for a processed food item.
pub async fn find_alternatives(
    provider: &Provider,
    food: &str,
) -> Result<HealthyAlternatives, AssistantError> {
    let request = ChatCompletionRequest {
        model: provider.model().to_string(),
        messages: vec![
            ChatMessage::system(ALTERNATIVES_SYSTEM_PROMPT),
            ChatMessage::user(format!("Provide healthy alternatives for: {}", food)),
        ],
        temperature: Some(0.7),
        max_tokens: Some(1000),
    };

    let response = provider.call_chat_completion(request).await?;
    let content = response
        .first_content()
        .ok_or(AssistantError::Transport(ApiConnectionError::EmptyResponse))?;

    let span = extract(content, JsonShape::Object)?;
    let value = decode(span)?;
    validate_alternatives(value)
}
