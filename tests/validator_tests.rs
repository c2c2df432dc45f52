use serde_json::json;

use nutri_assist::result_validator::{
    validate_alternatives, validate_meal_plan, validate_nutrition_analysis, validate_recipes,
    DEFAULT_COOKING_TIME, DEFAULT_DIETARY_FOCUS, DEFAULT_DIFFICULTY, DEFAULT_NUTRITION_FACTS,
    DEFAULT_WEEKLY_NOTES,
};

fn full_analysis_value() -> serde_json::Value {
    json!({
        "calories": "520",
        "macronutrients": {
            "carbohydrates": "45g (40%)",
            "protein": "30g (25%)",
            "fat": "20g (35%)"
        },
        "micronutrients": ["iron", "calcium"],
        "analysis": "A balanced lunch.",
        "suggestions": ["Add leafy greens."]
    })
}

#[test]
fn test_nutrition_analysis_accepts_complete_value() {
    let analysis = validate_nutrition_analysis(full_analysis_value()).unwrap();
    assert_eq!(analysis.calories, "520");
    assert_eq!(analysis.macronutrients.fat, "20g (35%)");
}

#[test]
fn test_nutrition_analysis_coerces_numeric_calories() {
    let mut value = full_analysis_value();
    value["calories"] = json!(520);
    let analysis = validate_nutrition_analysis(value).unwrap();
    assert_eq!(analysis.calories, "520");
}

#[test]
fn test_nutrition_analysis_rejects_missing_required_fields() {
    for field in ["calories", "macronutrients", "micronutrients", "analysis", "suggestions"] {
        let mut value = full_analysis_value();
        value.as_object_mut().unwrap().remove(field);
        let err = validate_nutrition_analysis(value).unwrap_err();
        assert_eq!(err.stage(), "validation", "field: {}", field);
    }
}

#[test]
fn test_nutrition_analysis_rejects_empty_suggestions() {
    let mut value = full_analysis_value();
    value["suggestions"] = json!([]);
    let err = validate_nutrition_analysis(value).unwrap_err();
    assert_eq!(err.stage(), "validation");
}

#[test]
fn test_alternatives_fill_optional_fields() {
    let value = json!({
        "original": "potato chips",
        "alternatives": [
            {"name": "air-popped popcorn"},
            {"name": "roasted chickpeas", "benefits": ["more protein"], "nutritionFacts": "120 kcal per serving"}
        ]
    });
    let result = validate_alternatives(value).unwrap();
    assert_eq!(result.original, "potato chips");
    assert_eq!(result.alternatives.len(), 2);
    assert!(result.alternatives[0].benefits.is_empty());
    assert_eq!(result.alternatives[0].nutrition_facts, DEFAULT_NUTRITION_FACTS);
    assert_eq!(result.alternatives[1].benefits, vec!["more protein"]);
}

#[test]
fn test_alternatives_reject_empty_list_and_missing_names() {
    let err = validate_alternatives(json!({"original": "soda", "alternatives": []})).unwrap_err();
    assert_eq!(err.stage(), "validation");

    let err = validate_alternatives(json!({
        "original": "soda",
        "alternatives": [{"benefits": ["less sugar"]}]
    }))
    .unwrap_err();
    assert_eq!(err.stage(), "validation");
}

fn minimal_meal_plan_value() -> serde_json::Value {
    json!({
        "dailyPlans": [
            {
                "day": "Monday",
                "totalCalories": 1800,
                "meals": [
                    {
                        "type": "Breakfast",
                        "name": "Oatmeal with berries",
                        "calories": 400,
                        "macros": {"protein": "12g", "carbs": "60g", "fats": "9g"}
                    }
                ]
            }
        ]
    })
}

#[test]
fn test_meal_plan_missing_weekly_notes_gets_canned_defaults() {
    let plan = validate_meal_plan(minimal_meal_plan_value()).unwrap();
    assert_eq!(plan.weekly_notes.len(), 3);
    for (note, expected) in plan.weekly_notes.iter().zip(DEFAULT_WEEKLY_NOTES.iter()) {
        assert_eq!(note, expected);
    }
    assert_eq!(plan.dietary_focus, DEFAULT_DIETARY_FOCUS);
}

#[test]
fn test_meal_plan_keeps_provided_optional_fields() {
    let mut value = minimal_meal_plan_value();
    value["weeklyNotes"] = json!(["Drink water."]);
    value["dietaryFocus"] = json!("High protein");
    let plan = validate_meal_plan(value).unwrap();
    assert_eq!(plan.weekly_notes, vec!["Drink water."]);
    assert_eq!(plan.dietary_focus, "High protein");
}

#[test]
fn test_meal_plan_coerces_numeric_calories() {
    let plan = validate_meal_plan(minimal_meal_plan_value()).unwrap();
    assert_eq!(plan.daily_plans[0].total_calories, "1800");
    assert_eq!(plan.daily_plans[0].meals[0].calories, "400");
}

#[test]
fn test_meal_plan_missing_daily_plans_is_rejected() {
    let err = validate_meal_plan(json!({"weeklyNotes": ["note"]})).unwrap_err();
    assert_eq!(err.stage(), "validation");

    let err = validate_meal_plan(json!({"dailyPlans": []})).unwrap_err();
    assert_eq!(err.stage(), "validation");
}

fn full_recipe_value() -> serde_json::Value {
    json!([
        {
            "name": "Veggie omelette",
            "cookingTime": "15 minutes",
            "difficulty": "Easy",
            "ingredients": ["2 eggs", "1 bell pepper"],
            "instructions": ["Beat the eggs.", "Cook over medium heat."],
            "nutritionInfo": {"calories": "280", "protein": "18g", "carbs": "6g", "fats": "20g"},
            "tips": ["Use a non-stick pan."]
        }
    ])
}

#[test]
fn test_recipes_accept_complete_value() {
    let recipes = validate_recipes(full_recipe_value()).unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].name, "Veggie omelette");
    assert_eq!(recipes[0].tips, vec!["Use a non-stick pan."]);
}

#[test]
fn test_recipes_fill_optional_fields() {
    let value = json!([
        {
            "name": "Toast",
            "ingredients": ["bread"],
            "instructions": ["Toast the bread."]
        }
    ]);
    let recipes = validate_recipes(value).unwrap();
    assert_eq!(recipes[0].cooking_time, DEFAULT_COOKING_TIME);
    assert_eq!(recipes[0].difficulty, DEFAULT_DIFFICULTY);
    assert!(recipes[0].tips.is_empty());
    assert!(recipes[0].nutrition_info.is_none());
}

#[test]
fn test_recipes_reject_missing_required_fields() {
    let mut value = full_recipe_value();
    value[0].as_object_mut().unwrap().remove("instructions");
    let err = validate_recipes(value).unwrap_err();
    assert_eq!(err.stage(), "validation");

    let err = validate_recipes(json!([])).unwrap_err();
    assert_eq!(err.stage(), "validation");

    let err = validate_recipes(json!({"recipes": []})).unwrap_err();
    assert_eq!(err.stage(), "validation");
}
