use anyhow::Result;

use nutri_assist::api_connection::connection::Provider;
use nutri_assist::assistant_chat::chat_with_assistant;
use nutri_assist::assistant_error::AssistantError;
use nutri_assist::bmi::calculate_bmi;
use nutri_assist::cli::{parse_args, Command};
use nutri_assist::healthy_alternatives::find_alternatives;
use nutri_assist::meal_planner::{generate_meal_plan, MealPlanPreferences};
use nutri_assist::nutrition_analyzer::analyze_nutrition;
use nutri_assist::recipe_generator::{generate_recipes, RecipePreferences};

// Environment variable the CLI reads the credential from. The library
// itself never touches the environment; the key is injected below.
const API_KEY_ENV_VAR: &str = "GROQ_API_KEY";

fn report_failure(err: &AssistantError) -> anyhow::Error {
    eprintln!("[DEBUG] {} stage failure: {}", err.stage(), err);
    anyhow::anyhow!("{}", err.user_message())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = parse_args();
    let provider = Provider::groq(std::env::var(API_KEY_ENV_VAR).ok());

    match cli.command {
        Command::Analyze { meal } => {
            println!("Analyzing meal: {}", meal);
            let analysis = analyze_nutrition(&provider, &meal)
                .await
                .map_err(|e| report_failure(&e))?;
            println!("\nEstimated calories: {}", analysis.calories);
            println!("Carbohydrates: {}", analysis.macronutrients.carbohydrates);
            println!("Protein: {}", analysis.macronutrients.protein);
            println!("Fat: {}", analysis.macronutrients.fat);
            println!("Key micronutrients: {}", analysis.micronutrients.join(", "));
            println!("\n{}", analysis.analysis);
            println!("\nSuggestions:");
            for suggestion in &analysis.suggestions {
                println!(" - {}", suggestion);
            }
        }
        Command::Alternatives { food } => {
            println!("Finding healthy alternatives for: {}", food);
            let result = find_alternatives(&provider, &food)
                .await
                .map_err(|e| report_failure(&e))?;
            println!("\nInstead of {}, try:", result.original);
            for alternative in &result.alternatives {
                println!("\n{}", alternative.name);
                for benefit in &alternative.benefits {
                    println!(" - {}", benefit);
                }
                println!(" Nutrition: {}", alternative.nutrition_facts);
            }
        }
        Command::Chat { message } => {
            let reply = chat_with_assistant(&provider, &message)
                .await
                .map_err(|e| report_failure(&e))?;
            println!("{}", reply);
        }
        Command::MealPlan {
            diet_type,
            calories,
            restrictions,
            goal,
        } => {
            let preferences = MealPlanPreferences {
                diet_type,
                daily_calories: calories,
                restrictions,
                goal,
            };
            println!(
                "Generating a {} meal plan targeting {} calories per day...",
                preferences.diet_type, preferences.daily_calories
            );
            let plan = generate_meal_plan(&provider, &preferences)
                .await
                .map_err(|e| report_failure(&e))?;
            println!("\nDietary focus: {}", plan.dietary_focus);
            for day in &plan.daily_plans {
                println!("\n{} ({} calories)", day.day, day.total_calories);
                for meal in &day.meals {
                    println!(
                        " {}: {} ({}) - protein {}, carbs {}, fats {}",
                        meal.meal_type,
                        meal.name,
                        meal.calories,
                        meal.macros.protein,
                        meal.macros.carbs,
                        meal.macros.fats
                    );
                    if let Some(recipe) = &meal.recipe {
                        println!("   {}", recipe);
                    }
                }
            }
            println!("\nWeekly notes:");
            for note in &plan.weekly_notes {
                println!(" - {}", note);
            }
        }
        Command::Recipes {
            ingredients,
            cuisine,
            meal_type,
            dietary_restrictions,
        } => {
            println!("Generating recipes from: {}", ingredients.join(", "));
            let preferences = RecipePreferences {
                cuisine,
                meal_type,
                dietary_restrictions: if dietary_restrictions.is_empty() {
                    None
                } else {
                    Some(dietary_restrictions)
                },
            };
            let recipes = generate_recipes(&provider, &ingredients, &preferences)
                .await
                .map_err(|e| report_failure(&e))?;
            for recipe in &recipes {
                println!(
                    "\n{} ({}, {})",
                    recipe.name, recipe.cooking_time, recipe.difficulty
                );
                println!(" Ingredients:");
                for ingredient in &recipe.ingredients {
                    println!("  - {}", ingredient);
                }
                println!(" Instructions:");
                for (i, step) in recipe.instructions.iter().enumerate() {
                    println!("  {}. {}", i + 1, step);
                }
                if let Some(nutrition) = &recipe.nutrition_info {
                    println!(
                        " Per serving: {} calories, protein {}, carbs {}, fats {}",
                        nutrition.calories, nutrition.protein, nutrition.carbs, nutrition.fats
                    );
                }
                for tip in &recipe.tips {
                    println!(" Tip: {}", tip);
                }
            }
        }
        Command::Bmi {
            height,
            height_unit,
            weight,
            weight_unit,
        } => {
            let result = calculate_bmi(height, height_unit.into(), weight, weight_unit.into())?;
            println!("BMI: {}", result.bmi);
            println!("Status: {}", result.status);
            println!("Risk level: {}", result.risk_level);
        }
    }

    Ok(())
}
