//! BMI calculations over coders
//!
//! All calculations are pure functions of their inputs. Scores are returned
//! at full precision; rounding is left to whoever displays them.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::coder::Coder;
use crate::config::CalculatorConfig;
use crate::errors::BmiError;

/// A diet is recommended for any BMI strictly above this value
pub const DIET_RECOMMENDED_THRESHOLD: f64 = 25.0;

// ============================================================================
// Core Operations
// ============================================================================

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
///
/// A zero height is reported as [`BmiError::Arithmetic`] rather than
/// producing an infinite or NaN score.
pub fn compute_bmi_score(weight: f64, height: f64) -> Result<f64, BmiError> {
    if height == 0.0 {
        warn!(weight, "BMI requested for zero height");
        return Err(BmiError::Arithmetic { weight });
    }
    Ok(weight / (height * height))
}

/// Whether a diet is recommended for the given measurements
pub fn is_diet_recommended(weight: f64, height: f64) -> Result<bool, BmiError> {
    diet_recommended_above(weight, height, DIET_RECOMMENDED_THRESHOLD)
}

/// Find the coder with the highest BMI
///
/// Ties keep the coder that appears first. An empty slice yields `None`.
pub fn find_coder_with_worst_bmi(coders: &[Coder]) -> Result<Option<&Coder>, BmiError> {
    let mut worst: Option<(&Coder, f64)> = None;

    for coder in coders {
        let score = compute_bmi_score(coder.weight(), coder.height())?;
        let replace = match worst {
            None => true,
            Some((_, worst_score)) => score > worst_score,
        };
        if replace {
            worst = Some((coder, score));
        }
    }

    debug!(
        coders = coders.len(),
        worst_bmi = ?worst.map(|(_, score)| score),
        "Scanned coders for worst BMI"
    );
    Ok(worst.map(|(coder, _)| coder))
}

/// BMI score of every coder, in input order
pub fn get_bmi_scores(coders: &[Coder]) -> Result<Vec<f64>, BmiError> {
    let scores = coders
        .iter()
        .map(|coder| compute_bmi_score(coder.weight(), coder.height()))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(coders = coders.len(), "Computed BMI scores");
    Ok(scores)
}

fn diet_recommended_above(weight: f64, height: f64, threshold: f64) -> Result<bool, BmiError> {
    let score = compute_bmi_score(weight, height)?;
    let recommended = score > threshold;
    debug!(weight, height, bmi = score, threshold, recommended, "Evaluated diet");
    Ok(recommended)
}

// ============================================================================
// BMI Categories
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    SeverelyUnderweight,
    Underweight,
    Normal,
    Overweight,
    ObeseClass1,
    ObeseClass2,
    ObeseClass3,
}

impl BmiCategory {
    /// Get the BMI range for this category (lower bound inclusive)
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::SeverelyUnderweight => (0.0, 16.0),
            BmiCategory::Underweight => (16.0, 18.5),
            BmiCategory::Normal => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::ObeseClass1 => (30.0, 35.0),
            BmiCategory::ObeseClass2 => (35.0, 40.0),
            BmiCategory::ObeseClass3 => (40.0, f64::INFINITY),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::SeverelyUnderweight => "Severely Underweight",
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal/Healthy",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseClass1 => "Obese (Class I)",
            BmiCategory::ObeseClass2 => "Obese (Class II)",
            BmiCategory::ObeseClass3 => "Obese (Class III)",
        }
    }
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 16.0 {
        BmiCategory::SeverelyUnderweight
    } else if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else if bmi < 35.0 {
        BmiCategory::ObeseClass1
    } else if bmi < 40.0 {
        BmiCategory::ObeseClass2
    } else {
        BmiCategory::ObeseClass3
    }
}

// ============================================================================
// Configured Calculator
// ============================================================================

/// BMI operations bound to a [`CalculatorConfig`]
///
/// The default calculator behaves exactly like the free functions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BmiCalculator {
    config: CalculatorConfig,
}

impl BmiCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn compute_bmi_score(&self, weight: f64, height: f64) -> Result<f64, BmiError> {
        compute_bmi_score(weight, height)
    }

    /// Whether a diet is recommended, using the configured threshold
    pub fn is_diet_recommended(&self, weight: f64, height: f64) -> Result<bool, BmiError> {
        diet_recommended_above(weight, height, self.config.diet_threshold)
    }

    pub fn find_coder_with_worst_bmi<'a>(
        &self,
        coders: &'a [Coder],
    ) -> Result<Option<&'a Coder>, BmiError> {
        find_coder_with_worst_bmi(coders)
    }

    pub fn get_bmi_scores(&self, coders: &[Coder]) -> Result<Vec<f64>, BmiError> {
        get_bmi_scores(coders)
    }

    /// Score and category for one coder
    pub fn classify(&self, coder: &Coder) -> Result<(f64, BmiCategory), BmiError> {
        let score = compute_bmi_score(coder.weight(), coder.height())?;
        Ok((score, classify_bmi(score)))
    }
}
