use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Parameter;
use crate::models::bs::PricingEngine;
use crate::pricing::curve::CurveGrid;
use crate::pricing::types::PricingParameters;

/// Range and step of one dashboard slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderBounds {
    pub min: f64,
    pub max: f64,
    /// Slider increment; values are snapped to `min + n * step`
    pub step: f64,
}

impl SliderBounds {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Round to the nearest slider position and keep the result in range.
    pub fn snap(&self, value: f64) -> f64 {
        if self.step <= 0.0 {
            return self.clamp(value);
        }
        let steps = ((value - self.min) / self.step).round();
        self.clamp(self.min + steps * self.step)
    }
}

/// Slider bounds for the five inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputBounds {
    #[serde(default = "default_price_bounds")]
    pub underlying_price: SliderBounds,
    #[serde(default = "default_price_bounds")]
    pub strike_price: SliderBounds,
    #[serde(default = "default_unit_bounds")]
    pub risk_free_rate: SliderBounds,
    #[serde(default = "default_unit_bounds")]
    pub volatility: SliderBounds,
    #[serde(default = "default_maturity_bounds")]
    pub time_to_maturity: SliderBounds,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            underlying_price: default_price_bounds(),
            strike_price: default_price_bounds(),
            risk_free_rate: default_unit_bounds(),
            volatility: default_unit_bounds(),
            time_to_maturity: default_maturity_bounds(),
        }
    }
}

impl InputBounds {
    pub fn get(&self, parameter: Parameter) -> &SliderBounds {
        match parameter {
            Parameter::UnderlyingPrice => &self.underlying_price,
            Parameter::StrikePrice => &self.strike_price,
            Parameter::RiskFreeRate => &self.risk_free_rate,
            Parameter::Volatility => &self.volatility,
            Parameter::TimeToMaturity => &self.time_to_maturity,
        }
    }
}

fn default_price_bounds() -> SliderBounds {
    SliderBounds::new(1.0, 1000.0, 1.0)
}

fn default_unit_bounds() -> SliderBounds {
    SliderBounds::new(0.0, 1.0, 0.01)
}

fn default_maturity_bounds() -> SliderBounds {
    SliderBounds::new(0.01, 1.0, 0.01)
}

/// Settings of the pricing dashboard: slider ranges, initial values, curve
/// resolution and display precision.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// price_decimals = 4
///
/// [curve]
/// samples = 250
///
/// [bounds.volatility]
/// min = 0.05
/// max = 2.0
/// step = 0.05
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Decimals shown for call and put prices
    #[serde(default = "default_price_decimals")]
    pub price_decimals: usize,

    /// Clamp out-of-range inputs into their slider range instead of rejecting them
    #[serde(default = "default_clamp_inputs")]
    pub clamp_inputs: bool,

    /// Round parsed inputs to the nearest slider step
    #[serde(default)]
    pub snap_to_step: bool,

    #[serde(default)]
    pub curve: CurveGrid,

    #[serde(default)]
    pub bounds: InputBounds,

    /// Initial slider positions
    #[serde(default)]
    pub defaults: PricingParameters,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            curve: CurveGrid::default(),
            bounds: InputBounds::default(),
            defaults: PricingParameters::default(),
            price_decimals: default_price_decimals(),
            clamp_inputs: default_clamp_inputs(),
            snap_to_step: false,
        }
    }
}

fn default_price_decimals() -> usize {
    2
}

fn default_clamp_inputs() -> bool {
    true
}

impl DashboardConfig {
    /// Coarse curves for quick previews.
    pub fn preview() -> Self {
        Self {
            curve: CurveGrid::with_samples(25),
            ..Self::default()
        }
    }

    /// Dense curves for exported charts.
    pub fn high_resolution() -> Self {
        Self {
            curve: CurveGrid::with_samples(500),
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("failed to parse dashboard config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize dashboard config")
    }

    /// Check internal consistency: a usable grid, ordered slider ranges and
    /// defaults that sit inside them and inside the model domain.
    pub fn validate(&self) -> Result<()> {
        if let Err(err) = self.curve.validate() {
            warn!(%err, "rejecting curve grid");
            return Err(err);
        }

        for parameter in Parameter::ALL {
            let bounds = self.bounds.get(parameter);
            if !(bounds.min.is_finite() && bounds.max.is_finite()) || bounds.min > bounds.max {
                warn!(%parameter, min = bounds.min, max = bounds.max, "rejecting slider range");
                bail!(
                    "slider range for {} is invalid: [{}, {}]",
                    parameter,
                    bounds.min,
                    bounds.max
                );
            }
            if bounds.step < 0.0 {
                warn!(%parameter, step = bounds.step, "rejecting slider step");
                bail!("slider step for {} is negative: {}", parameter, bounds.step);
            }
            let value = self.defaults.get(parameter);
            if !bounds.contains(value) {
                warn!(%parameter, value, min = bounds.min, max = bounds.max, "rejecting default input");
                bail!(
                    "default {} = {} lies outside [{}, {}]",
                    parameter,
                    value,
                    bounds.min,
                    bounds.max
                );
            }
        }

        if let Err(err) = self.defaults.validate() {
            warn!(%err, "rejecting default parameters");
            return Err(err).context("default parameters are outside the pricing domain");
        }
        Ok(())
    }

    /// Engine sampling curves on this configuration's grid.
    pub fn engine(&self) -> PricingEngine {
        PricingEngine::with_grid(self.curve)
    }
}
