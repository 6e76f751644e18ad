//! Calculator configuration
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. An optional TOML document supplied by the caller
//! 3. Environment variables (prefix: HC__)

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::bmi::DIET_RECOMMENDED_THRESHOLD;

/// Settings for a [`BmiCalculator`](crate::BmiCalculator)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// A diet is recommended when the BMI is strictly above this value
    pub diet_threshold: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            diet_threshold: DIET_RECOMMENDED_THRESHOLD,
        }
    }
}

impl CalculatorConfig {
    /// Load configuration from an optional TOML document and the environment
    ///
    /// e.g., HC__DIET_THRESHOLD=27.5 sets diet_threshold
    pub fn load(toml: Option<&str>) -> Result<Self> {
        Self::load_with_env(toml, config::Environment::with_prefix("HC").separator("__"))
    }

    fn load_with_env(toml: Option<&str>, env: config::Environment) -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&CalculatorConfig::default())?);

        if let Some(toml) = toml {
            builder = builder.add_source(config::File::from_str(toml, config::FileFormat::Toml));
        }

        let loaded: CalculatorConfig = builder.add_source(env).build()?.try_deserialize()?;
        loaded.validate()?;

        tracing::debug!(diet_threshold = loaded.diet_threshold, "Loaded calculator config");
        Ok(loaded)
    }

    /// Reject thresholds no BMI could meaningfully be compared against
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.diet_threshold.is_finite() && self.diet_threshold > 0.0,
            "diet_threshold must be a positive number, got {}",
            self.diet_threshold
        );
        Ok(())
    }
}
