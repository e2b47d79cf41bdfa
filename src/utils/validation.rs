use crate::utils::error::{WorkoutError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Reject zero, negative, NaN and infinite readings.
pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(WorkoutError::invalid_reading(
            field_name,
            format!("value must be a finite number, got {}", value),
        ));
    }
    if value <= 0.0 {
        return Err(WorkoutError::invalid_reading(
            field_name,
            format!("value must be greater than zero, got {}", value),
        ));
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(WorkoutError::invalid_reading(
            field_name,
            format!("value must be a non-negative finite number, got {}", value),
        ));
    }
    Ok(())
}

pub fn validate_arity(field_name: &str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(WorkoutError::invalid_reading(
            field_name,
            format!("expected {} values, got {}", expected, actual),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(WorkoutError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
