//! Measurement range checks
//!
//! The BMI operations never validate their inputs. These checks are opt-in,
//! used by [`Coder::validated`](crate::Coder::validated) for callers that
//! take measurements from people rather than from code.

use crate::errors::ValidationError;

/// Weight bounds in kilograms
pub const MIN_WEIGHT_KG: f64 = 20.0;
pub const MAX_WEIGHT_KG: f64 = 500.0;

/// Height bounds in meters (infants to tallest recorded humans)
pub const MIN_HEIGHT_M: f64 = 0.5;
pub const MAX_HEIGHT_M: f64 = 3.0;

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), ValidationError> {
    if !weight_kg.is_finite() {
        return Err(ValidationError::new("weight", "must be a valid number"));
    }
    if weight_kg < MIN_WEIGHT_KG {
        return Err(ValidationError::new(
            "weight",
            format!("must be at least {} kg", MIN_WEIGHT_KG),
        ));
    }
    if weight_kg > MAX_WEIGHT_KG {
        return Err(ValidationError::new(
            "weight",
            format!("must be at most {} kg", MAX_WEIGHT_KG),
        ));
    }
    Ok(())
}

/// Validate height value (in meters)
pub fn validate_height_m(height_m: f64) -> Result<(), ValidationError> {
    if !height_m.is_finite() {
        return Err(ValidationError::new("height", "must be a valid number"));
    }
    if height_m < MIN_HEIGHT_M {
        return Err(ValidationError::new(
            "height",
            format!("must be at least {} m", MIN_HEIGHT_M),
        ));
    }
    if height_m > MAX_HEIGHT_M {
        return Err(ValidationError::new(
            "height",
            format!("must be at most {} m", MAX_HEIGHT_M),
        ));
    }
    Ok(())
}
