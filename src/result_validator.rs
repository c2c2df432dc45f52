use serde_json::{Map, Value};

use crate::assistant_error::AssistantError;
use crate::healthy_alternatives::HealthyAlternatives;
use crate::meal_planner::MealPlan;
use crate::nutrition_analyzer::NutritionAnalysis;
use crate::recipe_generator::Recipe;

/// Canned tips used when a meal plan arrives without weekly notes.
pub const DEFAULT_WEEKLY_NOTES: [&str; 3] = [
    "Stay hydrated by drinking at least eight glasses of water a day.",
    "Prep ingredients ahead of time to keep weekday cooking quick.",
    "Adjust portion sizes to match your hunger and activity level.",
];

pub const DEFAULT_DIETARY_FOCUS: &str =
    "A balanced approach aligned with your preferences and goal.";

pub const DEFAULT_NUTRITION_FACTS: &str = "Not provided";

pub const DEFAULT_COOKING_TIME: &str = "Not specified";

pub const DEFAULT_DIFFICULTY: &str = "Medium";

fn validation_error(cause: impl Into<String>, value: &Value) -> AssistantError {
    AssistantError::validation(cause, &value.to_string())
}

fn non_empty_str(obj: &Map<String, Value>, field: &str) -> bool {
    obj.get(field)
        .and_then(Value::as_str)
        .map(|s| !s.trim().is_empty())
        .unwrap_or(false)
}

fn non_empty_array(obj: &Map<String, Value>, field: &str) -> bool {
    obj.get(field)
        .and_then(Value::as_array)
        .map(|a| !a.is_empty())
        .unwrap_or(false)
}

/// Backends intermittently emit calorie counts as JSON numbers even when
/// asked for strings.
fn coerce_number_to_string(obj: &mut Map<String, Value>, field: &str) {
    if let Some(v) = obj.get_mut(field) {
        if let Value::Number(n) = v {
            *v = Value::String(n.to_string());
        }
    }
}

fn default_string(obj: &mut Map<String, Value>, field: &str, default: &str) {
    if !non_empty_str(obj, field) {
        obj.insert(field.to_string(), Value::String(default.to_string()));
    }
}

/// NutritionAnalysis requires calories, the full macronutrient breakdown,
/// at least one micronutrient, the analysis text, and at least one
/// suggestion.
pub fn validate_nutrition_analysis(
    mut value: Value,
) -> Result<NutritionAnalysis, AssistantError> {
    if let Some(obj) = value.as_object_mut() {
        coerce_number_to_string(obj, "calories");
    }

    let obj = match value.as_object() {
        Some(obj) => obj,
        None => return Err(validation_error("reply is not a JSON object", &value)),
    };

    for field in ["calories", "analysis"] {
        if !non_empty_str(obj, field) {
            return Err(validation_error(
                format!("required field \"{}\" is missing or empty", field),
                &value,
            ));
        }
    }

    match obj.get("macronutrients").and_then(Value::as_object) {
        Some(macros)
            if non_empty_str(macros, "carbohydrates")
                && non_empty_str(macros, "protein")
                && non_empty_str(macros, "fat") => {}
        _ => {
            return Err(validation_error(
                "required field \"macronutrients\" is missing or incomplete",
                &value,
            ))
        }
    }

    for field in ["micronutrients", "suggestions"] {
        if !non_empty_array(obj, field) {
            return Err(validation_error(
                format!("required field \"{}\" is missing or empty", field),
                &value,
            ));
        }
    }

    serde_json::from_value(value.clone()).map_err(|e| {
        validation_error(
            format!("decoded value does not fit the nutrition analysis shape: {}", e),
            &value,
        )
    })
}

/// HealthyAlternatives requires the original term and a non-empty list of
/// alternatives, each with a name. Benefits and nutrition facts are
/// defaulted when absent.
pub fn validate_alternatives(mut value: Value) -> Result<HealthyAlternatives, AssistantError> {
    if let Some(obj) = value.as_object_mut() {
        if let Some(entries) = obj.get_mut("alternatives").and_then(Value::as_array_mut) {
            for entry in entries {
                if let Some(alt) = entry.as_object_mut() {
                    if !alt.contains_key("benefits") {
                        alt.insert("benefits".to_string(), Value::Array(Vec::new()));
                    }
                    default_string(alt, "nutritionFacts", DEFAULT_NUTRITION_FACTS);
                }
            }
        }
    }

    let obj = match value.as_object() {
        Some(obj) => obj,
        None => return Err(validation_error("reply is not a JSON object", &value)),
    };

    if !non_empty_str(obj, "original") {
        return Err(validation_error(
            "required field \"original\" is missing or empty",
            &value,
        ));
    }

    let entries = match obj.get("alternatives").and_then(Value::as_array) {
        Some(entries) if !entries.is_empty() => entries,
        _ => {
            return Err(validation_error(
                "required field \"alternatives\" is missing or empty",
                &value,
            ))
        }
    };
    for entry in entries {
        let named = entry
            .as_object()
            .map(|alt| non_empty_str(alt, "name"))
            .unwrap_or(false);
        if !named {
            return Err(validation_error(
                "every alternative must carry a name",
                &value,
            ));
        }
    }

    serde_json::from_value(value.clone()).map_err(|e| {
        validation_error(
            format!("decoded value does not fit the alternatives shape: {}", e),
            &value,
        )
    })
}

/// MealPlan requires a non-empty list of daily plans. Dietary focus and
/// weekly notes get deterministic defaults; no partial plan is surfaced.
pub fn validate_meal_plan(mut value: Value) -> Result<MealPlan, AssistantError> {
    if let Some(obj) = value.as_object_mut() {
        default_string(obj, "dietaryFocus", DEFAULT_DIETARY_FOCUS);

        let notes_present = obj
            .get("weeklyNotes")
            .and_then(Value::as_array)
            .map(|a| !a.is_empty())
            .unwrap_or(false);
        if !notes_present {
            obj.insert(
                "weeklyNotes".to_string(),
                Value::Array(
                    DEFAULT_WEEKLY_NOTES
                        .iter()
                        .map(|note| Value::String((*note).to_string()))
                        .collect(),
                ),
            );
        }

        if let Some(plans) = obj.get_mut("dailyPlans").and_then(Value::as_array_mut) {
            for plan in plans {
                if let Some(plan_obj) = plan.as_object_mut() {
                    coerce_number_to_string(plan_obj, "totalCalories");
                    if let Some(meals) = plan_obj.get_mut("meals").and_then(Value::as_array_mut) {
                        for meal in meals {
                            if let Some(meal_obj) = meal.as_object_mut() {
                                coerce_number_to_string(meal_obj, "calories");
                            }
                        }
                    }
                }
            }
        }
    }

    let obj = match value.as_object() {
        Some(obj) => obj,
        None => return Err(validation_error("reply is not a JSON object", &value)),
    };

    match obj.get("dailyPlans").and_then(Value::as_array) {
        Some(plans) if !plans.is_empty() => {}
        _ => {
            return Err(validation_error(
                "required field \"dailyPlans\" is missing or empty",
                &value,
            ))
        }
    }

    serde_json::from_value(value.clone()).map_err(|e| {
        validation_error(
            format!("decoded value does not fit the meal plan shape: {}", e),
            &value,
        )
    })
}

/// RecipeList requires a non-empty array where every recipe carries a
/// name, ingredients, and instructions. Cooking time, difficulty, and tips
/// are defaulted when absent.
pub fn validate_recipes(mut value: Value) -> Result<Vec<Recipe>, AssistantError> {
    if let Some(entries) = value.as_array_mut() {
        for entry in entries {
            if let Some(recipe) = entry.as_object_mut() {
                default_string(recipe, "cookingTime", DEFAULT_COOKING_TIME);
                default_string(recipe, "difficulty", DEFAULT_DIFFICULTY);
                if !recipe.contains_key("tips") {
                    recipe.insert("tips".to_string(), Value::Array(Vec::new()));
                }
            }
        }
    }

    let entries = match value.as_array() {
        Some(entries) if !entries.is_empty() => entries,
        _ => {
            return Err(validation_error(
                "reply is not a non-empty JSON array of recipes",
                &value,
            ))
        }
    };
    for entry in entries {
        let obj = match entry.as_object() {
            Some(obj) => obj,
            None => {
                return Err(validation_error(
                    "every recipe must be a JSON object",
                    &value,
                ))
            }
        };
        if !non_empty_str(obj, "name") {
            return Err(validation_error("every recipe must carry a name", &value));
        }
        if !non_empty_array(obj, "ingredients") {
            return Err(validation_error(
                "recipe ingredients are missing or empty",
                &value,
            ));
        }
        if !non_empty_array(obj, "instructions") {
            return Err(validation_error(
                "recipe instructions are missing or empty",
                &value,
            ));
        }
    }

    serde_json::from_value(value.clone()).map_err(|e| {
        validation_error(
            format!("decoded value does not fit the recipe list shape: {}", e),
            &value,
        )
    })
}
