//! # bs-dashboard-lib: Black-Scholes pricing for interactive dashboards
//!
//! `bs-dashboard-lib` prices European call and put options with the closed-form
//! Black-Scholes formula and samples price-vs-underlying curves for plotting.
//! It is the computational core behind a slider dashboard: the presentation
//! layer supplies five scalars and receives two prices plus two curves.
//!
//! ## Core Features
//!
//! - **Pricing engine**: call, put, and the intermediate `d1`/`d2` terms
//! - **Price curves**: evenly spaced sweeps of the underlying over `[0.5 S, 1.5 S]`
//! - **Dashboard support**: TOML slider configuration, numeric parsing of raw
//!   inputs, per-change snapshots, SVG chart export
//! - **Batch pricing**: many parameter sets at once, with CSV import and export
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_dashboard_lib::{price_call, price_curve, price_put, OptionKind, PricingParameters};
//!
//! let params = PricingParameters::new(164.0, 165.0, 0.0521, 0.29, 0.0959)?;
//!
//! let call = price_call(&params)?;
//! let put = price_put(&params)?;
//! assert!((call - 5.79).abs() < 0.01);
//!
//! // put-call parity
//! let forward_gap = params.underlying_price - params.strike_price * params.discount_factor();
//! assert!((call - put - forward_gap).abs() < 1e-9);
//!
//! let curve = price_curve(&params, OptionKind::Call)?;
//! assert_eq!(curve.len(), 100);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Errors
//!
//! Every pricing operation returns [`DomainError`] when S, K, sigma or T is
//! not strictly positive, or when any input is not finite. The engine does no
//! I/O and has no other failure mode.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod dashboard;
pub mod error;
pub mod models;
pub mod pricing;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{DomainError, InputError, Parameter};

pub use models::{
    bs::{bs_call_price, bs_intermediate_terms, bs_put_price, PricingEngine},
    normal::norm_cdf,
};

pub use pricing::{
    batch::{price_batch, read_parameters_csv, write_results_csv},
    curve::{CurveGrid, CurvePoint, PriceCurve, MAX_CURVE_SAMPLES},
    types::{OptionKind, PricingParameters, PricingResult},
};

pub use dashboard::{
    config::{DashboardConfig, InputBounds, SliderBounds},
    input::{parse_inputs, RawInputs},
    plot::{render_curve_svg, write_curve_svg, ChartStyle},
    snapshot::DashboardSnapshot,
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured dashboard settings.
///
/// - [`standard()`]: 100-point curves, the stock slider ranges
/// - [`preview()`]: 25-point curves for fast redraws
/// - [`high_resolution()`]: 500-point curves for exported charts
pub mod default_configs {
    use crate::dashboard::config::DashboardConfig;

    /// Slider ranges S, K in [1, 1000], r, sigma in [0, 1], T in [0.01, 1],
    /// 100 curve samples and prices shown to 2 decimals.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bs_dashboard_lib::default_configs;
    ///
    /// let config = default_configs::standard();
    /// assert_eq!(config.curve.samples, 100);
    /// ```
    pub fn standard() -> DashboardConfig {
        DashboardConfig::default()
    }

    /// Same ranges as [`standard()`] with 25 curve samples.
    pub fn preview() -> DashboardConfig {
        DashboardConfig::preview()
    }

    /// Same ranges as [`standard()`] with 500 curve samples.
    pub fn high_resolution() -> DashboardConfig {
        DashboardConfig::high_resolution()
    }
}

// ================================================================================================
// CONVENIENCE API
// ================================================================================================

/// Black-Scholes price of a European call.
///
/// `S * N(d1) - K * exp(-r T) * N(d2)`
pub fn price_call(params: &PricingParameters) -> Result<f64, DomainError> {
    PricingEngine::new().call_price(params)
}

/// Black-Scholes price of a European put.
///
/// `K * exp(-r T) * N(-d2) - S * N(-d1)`
pub fn price_put(params: &PricingParameters) -> Result<f64, DomainError> {
    PricingEngine::new().put_price(params)
}

/// Sample `kind` prices at 100 evenly spaced underlying prices over
/// `[0.5 S, 1.5 S]`, holding K, r, sigma and T fixed.
///
/// Use [`PricingEngine::with_grid`] for a different resolution or range.
pub fn price_curve(params: &PricingParameters, kind: OptionKind) -> Result<PriceCurve, DomainError> {
    PricingEngine::new().price_curve(params, kind)
}
