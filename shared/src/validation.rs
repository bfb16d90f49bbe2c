//! Input validation functions
//!
//! The engine only requires strictly positive values. The ranges below are the
//! practical input domain a form or API caller enforces before invoking it.

use crate::bmi::Measurement;

/// Shortest accepted height, in meters
pub const HEIGHT_MIN_M: f64 = 0.5;
/// Tallest accepted height, in meters
pub const HEIGHT_MAX_M: f64 = 2.5;
/// Lightest accepted weight, in kilograms
pub const WEIGHT_MIN_KG: f64 = 1.0;
/// Heaviest accepted weight, in kilograms
pub const WEIGHT_MAX_KG: f64 = 300.0;
pub const AGE_MIN: u32 = 1;
pub const AGE_MAX: u32 = 120;
pub const NAME_MAX_LEN: usize = 100;

/// Validate height value (in meters)
pub fn validate_height_m(height_m: f64) -> Result<(), String> {
    if height_m.is_nan() || height_m.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_m < HEIGHT_MIN_M {
        return Err(format!("Height must be at least {} m", HEIGHT_MIN_M));
    }
    if height_m > HEIGHT_MAX_M {
        return Err(format!("Height must be at most {} m", HEIGHT_MAX_M));
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < WEIGHT_MIN_KG {
        return Err(format!("Weight must be at least {} kg", WEIGHT_MIN_KG));
    }
    if weight_kg > WEIGHT_MAX_KG {
        return Err(format!("Weight must be at most {} kg", WEIGHT_MAX_KG));
    }
    Ok(())
}

/// Validate age in whole years
pub fn validate_age(age: u32) -> Result<(), String> {
    if !(AGE_MIN..=AGE_MAX).contains(&age) {
        return Err(format!("Age must be between {} and {}", AGE_MIN, AGE_MAX));
    }
    Ok(())
}

/// Validate a display name: must contain something other than whitespace
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Please enter your name".to_string());
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(format!("Name must be at most {} characters", NAME_MAX_LEN));
    }
    Ok(())
}

/// Range-check a height/weight pair and build a [`Measurement`] from it
pub fn validate_measurement(height_m: f64, weight_kg: f64) -> Result<Measurement, ValidationError> {
    validate_height_m(height_m).map_err(|msg| ValidationError::new("height_m", &msg))?;
    validate_weight_kg(weight_kg).map_err(|msg| ValidationError::new("weight_kg", &msg))?;
    Measurement::new(height_m, weight_kg)
        .map_err(|err| ValidationError::new("height_m", &err.to_string()))
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to the column labels shown to users
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "name" => "Name",
        "age" => "Age",
        "gender" => "Gender",
        "height" | "height_m" => "Height (m)",
        "weight" | "weight_kg" => "Weight (kg)",
        "bmi" => "BMI",
        "status" => "Status",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.user_message())
    }
}

impl std::error::Error for ValidationError {}
