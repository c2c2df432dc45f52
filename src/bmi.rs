use std::error::Error;
use std::fmt;

const INCHES_TO_METERS: f64 = 0.0254;
const FEET_TO_METERS: f64 = 0.3048;
const POUNDS_TO_KILOGRAMS: f64 = 0.45359237;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightUnit {
    Centimeters,
    Inches,
    Feet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Kilograms,
    Pounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiClassification {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiClassification {
    /// Boundary values are exact: 18.5 is already normal weight, 25 is
    /// already overweight, 30 is already obese.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiClassification::Underweight
        } else if bmi < 25.0 {
            BmiClassification::NormalWeight
        } else if bmi < 30.0 {
            BmiClassification::Overweight
        } else {
            BmiClassification::Obese
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            BmiClassification::Underweight => "Underweight",
            BmiClassification::NormalWeight => "Normal weight",
            BmiClassification::Overweight => "Overweight",
            BmiClassification::Obese => "Obese",
        }
    }

    pub fn risk_level(&self) -> &'static str {
        match self {
            BmiClassification::Underweight => "Moderate risk",
            BmiClassification::NormalWeight => "Low risk",
            BmiClassification::Overweight => "Moderate risk",
            BmiClassification::Obese => "High risk",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum BmiError {
    NonPositiveHeight,
    NonPositiveWeight,
}

impl fmt::Display for BmiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BmiError::NonPositiveHeight => write!(f, "Height must be greater than zero"),
            BmiError::NonPositiveWeight => write!(f, "Weight must be greater than zero"),
        }
    }
}

impl Error for BmiError {}

pub fn height_to_meters(value: f64, unit: HeightUnit) -> f64 {
    match unit {
        HeightUnit::Centimeters => value / 100.0,
        HeightUnit::Inches => value * INCHES_TO_METERS,
        HeightUnit::Feet => value * FEET_TO_METERS,
    }
}

pub fn meters_to_height(meters: f64, unit: HeightUnit) -> f64 {
    match unit {
        HeightUnit::Centimeters => meters * 100.0,
        HeightUnit::Inches => meters / INCHES_TO_METERS,
        HeightUnit::Feet => meters / FEET_TO_METERS,
    }
}

pub fn weight_to_kilograms(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kilograms => value,
        WeightUnit::Pounds => value * POUNDS_TO_KILOGRAMS,
    }
}

pub fn kilograms_to_weight(kilograms: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kilograms => kilograms,
        WeightUnit::Pounds => kilograms / POUNDS_TO_KILOGRAMS,
    }
}

/// Raw ratio: kilograms over meters squared. Decreasing in height,
/// increasing in weight.
pub fn bmi_ratio(height_meters: f64, weight_kilograms: f64) -> f64 {
    weight_kilograms / (height_meters * height_meters)
}

#[derive(Debug, Clone)]
pub struct BmiResult {
    /// Ratio rounded to one decimal for display.
    pub bmi: f64,
    pub status: &'static str,
    pub risk_level: &'static str,
    pub classification: BmiClassification,
}

pub fn calculate_bmi(
    height: f64,
    height_unit: HeightUnit,
    weight: f64,
    weight_unit: WeightUnit,
) -> Result<BmiResult, BmiError> {
    if height <= 0.0 {
        return Err(BmiError::NonPositiveHeight);
    }
    if weight <= 0.0 {
        return Err(BmiError::NonPositiveWeight);
    }

    let height_m = height_to_meters(height, height_unit);
    let weight_kg = weight_to_kilograms(weight, weight_unit);
    let ratio = bmi_ratio(height_m, weight_kg);
    let classification = BmiClassification::from_bmi(ratio);

    Ok(BmiResult {
        bmi: (ratio * 10.0).round() / 10.0,
        status: classification.status(),
        risk_level: classification.risk_level(),
        classification,
    })
}
