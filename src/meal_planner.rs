use serde::{Deserialize, Serialize};

use crate::api_connection::connection::{ApiConnectionError, Provider};
use crate::api_connection::endpoints::{ChatCompletionRequest, ChatMessage};
use crate::assistant_error::AssistantError;
use crate::response_extractor::{extract, JsonShape};
use crate::result_validator::validate_meal_plan;
use crate::tolerant_decoder::decode_with_recovery;

/// Field the secondary recovery path hunts for when a meal-plan reply is
/// unparseable as a whole. Other malformed shapes fail hard.
pub const MEAL_PLAN_RECOVERY_FIELD: &str = "dailyPlans";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct MealMacros {
    #[serde(default)]
    pub protein: String,
    #[serde(default)]
    pub carbs: String,
    #[serde(default)]
    pub fats: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMeal {
    #[serde(rename = "type", default)]
    pub meal_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub calories: String,
    #[serde(default)]
    pub macros: MealMacros,
    #[serde(default)]
    pub recipe: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub total_calories: String,
    #[serde(default)]
    pub meals: Vec<PlannedMeal>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    #[serde(default)]
    pub dietary_focus: String,
    pub daily_plans: Vec<DailyPlan>,
    #[serde(default)]
    pub weekly_notes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct MealPlanPreferences {
    pub diet_type: String,
    pub daily_calories: u32,
    pub restrictions: Vec<String>,
    pub goal: String,
}

const MEAL_PLAN_SYSTEM_PROMPT: &str = r#"You are a nutrition expert creating personalized weekly meal plans. Respond with a JSON object containing:
{
  "dietaryFocus": "one-sentence summary of what the plan emphasizes",
  "dailyPlans": [
    {
      "day": "Monday",
      "totalCalories": "total estimated calories for the day",
      "meals": [
        {
          "type": "Breakfast",
          "name": "meal name",
          "calories": "estimated calories",
          "macros": {
            "protein": "amount",
            "carbs": "amount",
            "fats": "amount"
          },
          "recipe": "short preparation note"
        }
      ]
    }
  ],
  "weeklyNotes": ["note 1", "note 2", "note 3"]
}
Cover all seven days with breakfast, lunch, and dinner for each.
The JSON object must be the only content in your response. Do not include any explanatory text before or after it."#;

fn build_user_prompt(preferences: &MealPlanPreferences) -> String {
    let restrictions = if preferences.restrictions.is_empty() {
        "none".to_string()
    } else {
        preferences.restrictions.join(", ")
    };
    format!(
        "Create a weekly meal plan for a {} diet targeting {} calories per day. Goal: {}. Dietary restrictions: {}.",
        preferences.diet_type, preferences.daily_calories, preferences.goal, restrictions
    )
}

/// Generates a weekly plan from the user's preferences.
pub async fn generate_meal_plan(
    provider: &Provider,
    preferences: &MealPlanPreferences,
) -> Result<MealPlan, AssistantError> {
    let request = ChatCompletionRequest {
        model: provider.model().to_string(),
        messages: vec![
            ChatMessage::system(MEAL_PLAN_SYSTEM_PROMPT),
            ChatMessage::user(build_user_prompt(preferences)),
        ],
        temperature: Some(0.7),
        max_tokens: Some(2048),
    };

    let response = provider.call_chat_completion(request).await?;
    let content = response
        .first_content()
        .ok_or(AssistantError::Transport(ApiConnectionError::EmptyResponse))?;

    let span = extract(content, JsonShape::Object)?;
    let value = decode_with_recovery(span, Some(MEAL_PLAN_RECOVERY_FIELD))?;
    validate_meal_plan(value)
}
