//! Healthy Coder core library
//!
//! BMI calculations over [`Coder`] measurements: single scores, diet
//! recommendations, and scans over groups of coders.

pub mod bmi;
pub mod coder;
pub mod config;
pub mod errors;
pub mod telemetry;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use bmi::*;
pub use coder::Coder;
pub use config::CalculatorConfig;
pub use errors::*;
pub use units::{HeightUnit, WeightUnit};
