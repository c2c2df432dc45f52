use serde::{Deserialize, Serialize};

use crate::api_connection::connection::{ApiConnectionError, Provider};
use crate::api_connection::endpoints::{ChatCompletionRequest, ChatMessage};
use crate::assistant_error::AssistantError;
use crate::response_extractor::{extract, JsonShape};
use crate::result_validator::validate_recipes;
use crate::tolerant_decoder::decode;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecipeNutrition {
    #[serde(default)]
    pub calories: String,
    #[serde(default)]
    pub protein: String,
    #[serde(default)]
    pub carbs: String,
    #[serde(default)]
    pub fats: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    #[serde(default)]
    pub cooking_time: String,
    #[serde(default)]
    pub difficulty: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub nutrition_info: Option<RecipeNutrition>,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RecipePreferences {
    pub cuisine: Option<String>,
    pub meal_type: Option<String>,
    pub dietary_restrictions: Option<Vec<String>>,
}

const RECIPES_SYSTEM_PROMPT: &str = r#"You are a creative chef and nutrition expert. Suggest recipes that use the ingredients the user has on hand. Respond with a JSON array of up to 3 recipe objects:
[
  {
    "name": "recipe name",
    "cookingTime": "total time, e.g. 25 minutes",
    "difficulty": "Easy, Medium, or Hard",
    "ingredients": ["ingredient with quantity"],
    "instructions": ["step 1", "step 2"],
    "nutritionInfo": {
      "calories": "per serving",
      "protein": "amount",
      "carbs": "amount",
      "fats": "amount"
    },
    "tips": ["optional cooking tip"]
  }
]
The JSON array must be the only content in your response. Do not include any explanatory text before or after it."#;

fn build_user_prompt(ingredients: &[String], preferences: &RecipePreferences) -> String {
    let mut prompt = format!("Suggest recipes using: {}.", ingredients.join(", "));
    if let Some(cuisine) = &preferences.cuisine {
        prompt.push_str(&format!(" Preferred cuisine: {}.", cuisine));
    }
    if let Some(meal_type) = &preferences.meal_type {
        prompt.push_str(&format!(" Meal type: {}.", meal_type));
    }
    if let Some(restrictions) = &preferences.dietary_restrictions {
        if !restrictions.is_empty() {
            prompt.push_str(&format!(
                " Dietary restrictions: {}.",
                restrictions.join(", ")
            ));
        }
    }
    prompt
}

/// Turns a list of on-hand ingredients into recipe suggestions.
pub async fn generate_recipes(
    provider: &Provider,
    ingredients: &[String],
    preferences: &RecipePreferences,
) -> Result<Vec<Recipe>, AssistantError> {
    let request = ChatCompletionRequest {
        model: provider.model().to_string(),
        messages: vec![
            ChatMessage::system(RECIPES_SYSTEM_PROMPT),
            ChatMessage::user(build_user_prompt(ingredients, preferences)),
        ],
        temperature: Some(0.7),
        max_tokens: Some(2048),
    };

    let response = provider.call_chat_completion(request).await?;
    let content = response
        .first_content()
        .ok_or(AssistantError::Transport(ApiConnectionError::EmptyResponse))?;

    let span = extract(content, JsonShape::Array)?;
    let value = decode(span)?;
    validate_recipes(value)
}
