//! Error types for the Healthy Coder calculator

use thiserror::Error;

/// Errors raised by BMI computations
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum BmiError {
    /// BMI was requested for a height of zero
    #[error("arithmetic error: BMI is undefined for zero height (weight = {weight})")]
    Arithmetic { weight: f64 },
}

/// Measurement validation error with field context
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
