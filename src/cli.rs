use clap::{Parser, Subcommand, ValueEnum};

use crate::bmi::{HeightUnit, WeightUnit};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze the nutritional content of a meal description
    Analyze {
        /// Free-text description of the meal, e.g. "2 eggs and toast"
        #[arg(short, long)]
        meal: String,
    },
    /// Suggest healthy alternatives for a processed food item
    Alternatives {
        /// Food item to replace, e.g. "potato chips"
        #[arg(short, long)]
        food: String,
    },
    /// Ask the nutrition assistant a free-form question
    Chat {
        #[arg(short, long)]
        message: String,
    },
    /// Generate a weekly meal plan
    MealPlan {
        /// Diet type, e.g. balanced, vegetarian, vegan, paleo, keto
        #[arg(long, default_value = "balanced")]
        diet_type: String,
        /// Daily calorie target
        #[arg(long, default_value_t = 2000)]
        calories: u32,
        /// Dietary restriction, repeatable (e.g. --restriction gluten-free)
        #[arg(long = "restriction")]
        restrictions: Vec<String>,
        /// Goal, e.g. weight-loss, muscle-gain, maintenance
        #[arg(long, default_value = "maintenance")]
        goal: String,
    },
    /// Generate recipes from available ingredients
    Recipes {
        /// Ingredient on hand, repeatable (e.g. --ingredient egg)
        #[arg(short, long = "ingredient", required = true)]
        ingredients: Vec<String>,
        #[arg(long)]
        cuisine: Option<String>,
        #[arg(long)]
        meal_type: Option<String>,
        /// Dietary restriction, repeatable
        #[arg(long = "dietary-restriction")]
        dietary_restrictions: Vec<String>,
    },
    /// Calculate Body Mass Index from height and weight
    Bmi {
        #[arg(long)]
        height: f64,
        #[arg(long, value_enum, default_value = "cm")]
        height_unit: HeightUnitArg,
        #[arg(long)]
        weight: f64,
        #[arg(long, value_enum, default_value = "kg")]
        weight_unit: WeightUnitArg,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum HeightUnitArg {
    Cm,
    In,
    Ft,
}

impl From<HeightUnitArg> for HeightUnit {
    fn from(arg: HeightUnitArg) -> Self {
        match arg {
            HeightUnitArg::Cm => HeightUnit::Centimeters,
            HeightUnitArg::In => HeightUnit::Inches,
            HeightUnitArg::Ft => HeightUnit::Feet,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum WeightUnitArg {
    Kg,
    Lb,
}

impl From<WeightUnitArg> for WeightUnit {
    fn from(arg: WeightUnitArg) -> Self {
        match arg {
            WeightUnitArg::Kg => WeightUnit::Kilograms,
            WeightUnitArg::Lb => WeightUnit::Pounds,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
