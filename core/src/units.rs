//! Unit conversion for coder measurements
//!
//! BMI is always computed in SI: kilograms and meters. Measurements taken in
//! other units are converted once, when a [`Coder`](crate::Coder) is built.

use serde::{Deserialize, Serialize};
use std::fmt;

const KG_PER_LB: f64 = 0.453592;
const KG_PER_STONE: f64 = 6.35029;
const METERS_PER_INCH: f64 = 0.0254;

// ============================================================================
// Weight Units
// ============================================================================

/// Unit a weight was measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
    Stone,
}

impl WeightUnit {
    /// Convert a value in this unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lbs => value * KG_PER_LB,
            WeightUnit::Stone => value * KG_PER_STONE,
        }
    }

    /// Convert kilograms to this unit
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lbs => kg / KG_PER_LB,
            WeightUnit::Stone => kg / KG_PER_STONE,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
            WeightUnit::Stone => "st",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" | "kilogram" | "kilograms" => Ok(WeightUnit::Kg),
            "lbs" | "lb" | "pound" | "pounds" => Ok(WeightUnit::Lbs),
            "st" | "stone" | "stones" => Ok(WeightUnit::Stone),
            _ => Err(format!("Unknown weight unit: {}", s)),
        }
    }
}

// ============================================================================
// Height Units
// ============================================================================

/// Unit a height was measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Meters,
    Cm,
    Inches,
}

impl HeightUnit {
    /// Convert a value in this unit to meters
    pub fn to_meters(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Meters => value,
            HeightUnit::Cm => value / 100.0,
            HeightUnit::Inches => value * METERS_PER_INCH,
        }
    }

    /// Convert meters to this unit
    pub fn from_meters(&self, meters: f64) -> f64 {
        match self {
            HeightUnit::Meters => meters,
            HeightUnit::Cm => meters * 100.0,
            HeightUnit::Inches => meters / METERS_PER_INCH,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            HeightUnit::Meters => "m",
            HeightUnit::Cm => "cm",
            HeightUnit::Inches => "in",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for HeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "m" | "meter" | "meters" => Ok(HeightUnit::Meters),
            "cm" | "centimeter" | "centimeters" => Ok(HeightUnit::Cm),
            "in" | "inch" | "inches" => Ok(HeightUnit::Inches),
            _ => Err(format!("Unknown height unit: {}", s)),
        }
    }
}
