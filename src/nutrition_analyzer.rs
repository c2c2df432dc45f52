use serde::{Deserialize, Serialize};

use crate::api_connection::connection::{ApiConnectionError, Provider};
use crate::api_connection::endpoints::{ChatCompletionRequest, ChatMessage};
use crate::assistant_error::AssistantError;
use crate::response_extractor::{extract, JsonShape};
use crate::result_validator::validate_nutrition_analysis;
use crate::tolerant_decoder::decode;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Macronutrients {
    pub carbohydrates: String,
    pub protein: String,
    pub fat: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NutritionAnalysis {
    pub calories: String,
    pub macronutrients: Macronutrients,
    pub micronutrients: Vec<String>,
    pub analysis: String,
    pub suggestions: Vec<String>,
}

const ANALYSIS_SYSTEM_PROMPT: &str = r#"You are a nutrition expert. Analyze the given meal and provide a detailed breakdown of its nutritional content. Respond with a JSON object containing:
{
  "calories": "estimated calories",
  "macronutrients": {
    "carbohydrates": "amount with percentage of meal",
    "protein": "amount with percentage of meal",
    "fat": "amount with percentage of meal"
  },
  "micronutrients": ["list of key vitamins and minerals"],
  "analysis": "brief analysis of the nutritional value",
  "suggestions": ["2-3 suggestions for improvement"]
}
The JSON object must be the only content in your response. Do not include any explanatory text before or after it."#;

/// Analyzes a free-text meal description into a structured breakdown.
pub async fn analyze_nutrition(
    provider: &Provider,
    meal_description: &str,
) -> Result<NutritionAnalysis, AssistantError> {
    let request = ChatCompletionRequest {
        model: provider.model().to_string(),
        messages: vec![
            ChatMessage::system(ANALYSIS_SYSTEM_PROMPT),
            ChatMessage::user(format!("Analyze this meal: {}", meal_description)),
        ],
        temperature: Some(0.5),
        max_tokens: Some(1000),
    };

    let response = provider.call_chat_completion(request).await?;
    let content = response
        .first_content()
        .ok_or(AssistantError::Transport(ApiConnectionError::EmptyResponse))?;

    let span = extract(content, JsonShape::Object)?;
    let value = decode(span)?;
    validate_nutrition_analysis(value)
}
