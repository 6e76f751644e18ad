//! The measured person that BMI operations work on

use crate::errors::ValidationError;
use crate::units::{HeightUnit, WeightUnit};
use crate::validation::{validate_height_m, validate_weight_kg};
use serde::{Deserialize, Serialize};

/// One measured coder
///
/// Height is in meters and weight in kilograms. [`Coder::new`] does not check
/// either value; a zero height is accepted here and reported by the BMI
/// operations instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coder {
    height: f64,
    weight: f64,
}

impl Coder {
    pub fn new(height: f64, weight: f64) -> Self {
        Self { height, weight }
    }

    /// Build a coder from measurements in arbitrary units
    pub fn from_units(
        height: f64,
        height_unit: HeightUnit,
        weight: f64,
        weight_unit: WeightUnit,
    ) -> Self {
        Self::new(height_unit.to_meters(height), weight_unit.to_kg(weight))
    }

    /// Build a coder, rejecting measurements outside human ranges
    pub fn validated(height: f64, weight: f64) -> Result<Self, ValidationError> {
        validate_height_m(height)?;
        validate_weight_kg(weight)?;
        Ok(Self::new(height, weight))
    }

    /// Height in meters
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Weight in kilograms
    pub fn weight(&self) -> f64 {
        self.weight
    }
}
