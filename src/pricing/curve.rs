use std::io;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use super::types::OptionKind;

/// Largest sample count a grid accepts.
pub const MAX_CURVE_SAMPLES: usize = 100_000;

/// Sampling grid for a price-vs-underlying sweep.
///
/// Samples are spread evenly over
/// `[lower_factor * S, upper_factor * S]`, both ends included, where `S` is
/// the reference underlying price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveGrid {
    /// Number of points on the curve
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Multiple of the reference price where the sweep starts
    #[serde(default = "default_lower_factor")]
    pub lower_factor: f64,
    /// Multiple of the reference price where the sweep ends
    #[serde(default = "default_upper_factor")]
    pub upper_factor: f64,
}

impl Default for CurveGrid {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            lower_factor: default_lower_factor(),
            upper_factor: default_upper_factor(),
        }
    }
}

impl CurveGrid {
    /// Default grid with a different resolution.
    pub fn with_samples(samples: usize) -> Self {
        Self {
            samples,
            ..Self::default()
        }
    }

    /// Reject grids that cannot produce an increasing sweep of positive prices.
    pub fn validate(&self) -> Result<()> {
        if self.samples < 2 {
            bail!("curve needs at least 2 samples, got {}", self.samples);
        }
        if self.samples > MAX_CURVE_SAMPLES {
            bail!(
                "curve samples must not exceed {}, got {}",
                MAX_CURVE_SAMPLES,
                self.samples
            );
        }
        if !(self.lower_factor > 0.0 && self.lower_factor.is_finite()) {
            bail!("lower_factor must be positive, got {}", self.lower_factor);
        }
        if !(self.upper_factor > self.lower_factor && self.upper_factor.is_finite()) {
            bail!(
                "upper_factor ({}) must exceed lower_factor ({})",
                self.upper_factor,
                self.lower_factor
            );
        }
        Ok(())
    }

    /// Underlying prices to evaluate for a reference price `reference`.
    ///
    /// Behaves like `linspace`: the first sample is exactly the lower bound and
    /// the last exactly the upper bound. A single-sample grid yields the lower
    /// bound only; an empty grid yields nothing.
    pub fn underlying_samples(&self, reference: f64) -> Vec<f64> {
        let start = self.lower_factor * reference;
        let end = self.upper_factor * reference;
        match self.samples {
            0 => Vec::new(),
            1 => vec![start],
            n => {
                let step = (end - start) / (n - 1) as f64;
                (0..n)
                    .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                    .collect()
            }
        }
    }
}

fn default_samples() -> usize {
    100
}

fn default_lower_factor() -> f64 {
    0.5
}

fn default_upper_factor() -> f64 {
    1.5
}

/// One point of a price curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub underlying_price: f64,
    pub option_price: f64,
}

/// Option prices sampled across a range of underlying prices.
///
/// Built fresh by [`crate::PricingEngine::price_curve`] for every input change;
/// points are ordered by increasing underlying price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceCurve {
    pub kind: OptionKind,
    pub points: Vec<CurvePoint>,
}

impl PriceCurve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sampled underlying prices (x axis).
    pub fn underlying_prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.underlying_price)
    }

    /// Option prices (y axis).
    pub fn option_prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.option_price)
    }

    /// Points as `(x, y)` tuples, the shape plotting backends expect.
    pub fn xy(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.underlying_price, p.option_price))
            .collect()
    }

    /// `(min, max)` of the sampled underlying prices.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        Some((
            self.points.first()?.underlying_price,
            self.points.last()?.underlying_price,
        ))
    }

    /// `(min, max)` of the sampled option prices.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let min = self.option_prices().fold(f64::INFINITY, f64::min);
        let max = self.option_prices().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }

    /// Write the curve as CSV with an `underlying_price,option_price` header.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for point in &self.points {
            wtr.serialize(point)
                .context("failed to serialize curve point")?;
        }
        wtr.flush().context("failed to flush curve CSV")?;
        Ok(())
    }
}
