// Closed-form Black-Scholes pricing of European calls and puts on a
// non-dividend-paying underlying, plus the price sweep used to draw
// price-vs-underlying curves. Implied volatility and Greeks are out of scope.

use tracing::debug;

use crate::error::DomainError;
use crate::models::normal::norm_cdf;
use crate::pricing::curve::{CurveGrid, CurvePoint, PriceCurve};
use crate::pricing::types::{OptionKind, PricingParameters, PricingResult};

/// The d1 and d2 terms of the Black-Scholes formula.
///
/// ```text
/// d1 = (ln(S/K) + (r + sigma^2/2) T) / (sigma sqrt(T))
/// d2 = d1 - sigma sqrt(T)
/// ```
pub fn bs_intermediate_terms(params: &PricingParameters) -> Result<(f64, f64), DomainError> {
    params.validate()?;
    Ok(unchecked_terms(params))
}

/// Price of a European call option under Black-Scholes assumptions.
pub fn bs_call_price(params: &PricingParameters) -> Result<f64, DomainError> {
    let (d1, d2) = bs_intermediate_terms(params)?;
    let price = params.underlying_price * norm_cdf(d1)
        - params.strike_price * params.discount_factor() * norm_cdf(d2);
    // cancellation can leave a tiny negative value deep out of the money
    Ok(price.max(0.0))
}

/// Price of a European put option under Black-Scholes assumptions.
pub fn bs_put_price(params: &PricingParameters) -> Result<f64, DomainError> {
    let (d1, d2) = bs_intermediate_terms(params)?;
    let price = params.strike_price * params.discount_factor() * norm_cdf(-d2)
        - params.underlying_price * norm_cdf(-d1);
    Ok(price.max(0.0))
}

fn unchecked_terms(params: &PricingParameters) -> (f64, f64) {
    let PricingParameters {
        underlying_price: s,
        strike_price: k,
        risk_free_rate: r,
        volatility: sigma,
        time_to_maturity: t,
    } = *params;
    let sigma_sqrt_t = sigma * t.sqrt();
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / sigma_sqrt_t;
    let d2 = d1 - sigma_sqrt_t;
    (d1, d2)
}

/// Stateless Black-Scholes evaluator.
///
/// The engine only carries the sampling grid used by
/// [`PricingEngine::price_curve`]; every method reads its arguments and
/// returns a fresh value, so one engine can be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PricingEngine {
    grid: CurveGrid,
}

impl PricingEngine {
    /// Engine with the default 100-point grid over `[0.5 S, 1.5 S]`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grid(grid: CurveGrid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &CurveGrid {
        &self.grid
    }

    /// Returns `(d1, d2)` for `params`.
    pub fn intermediate_terms(&self, params: &PricingParameters) -> Result<(f64, f64), DomainError> {
        bs_intermediate_terms(params)
    }

    pub fn call_price(&self, params: &PricingParameters) -> Result<f64, DomainError> {
        bs_call_price(params)
    }

    pub fn put_price(&self, params: &PricingParameters) -> Result<f64, DomainError> {
        bs_put_price(params)
    }

    /// Price either side of the contract.
    pub fn price(&self, params: &PricingParameters, kind: OptionKind) -> Result<f64, DomainError> {
        match kind {
            OptionKind::Call => bs_call_price(params),
            OptionKind::Put => bs_put_price(params),
        }
    }

    /// Call and put for the same parameter set.
    pub fn price_both(&self, params: &PricingParameters) -> Result<PricingResult, DomainError> {
        Ok(PricingResult {
            params: *params,
            call_price: bs_call_price(params)?,
            put_price: bs_put_price(params)?,
        })
    }

    /// Sweep the underlying price over the engine's grid, holding K, r, sigma
    /// and T at their reference values.
    pub fn price_curve(
        &self,
        params: &PricingParameters,
        kind: OptionKind,
    ) -> Result<PriceCurve, DomainError> {
        self.price_curve_on(params, kind, &self.grid)
    }

    /// Same as [`PricingEngine::price_curve`] on an explicit grid.
    pub fn price_curve_on(
        &self,
        params: &PricingParameters,
        kind: OptionKind,
        grid: &CurveGrid,
    ) -> Result<PriceCurve, DomainError> {
        params.validate()?;

        let points = grid
            .underlying_samples(params.underlying_price)
            .into_iter()
            .map(|underlying_price| {
                let option_price = self.price(&params.with_underlying(underlying_price), kind)?;
                Ok::<_, DomainError>(CurvePoint {
                    underlying_price,
                    option_price,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            kind = %kind,
            samples = points.len(),
            underlying = params.underlying_price,
            "sampled price curve"
        );

        Ok(PriceCurve { kind, points })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn d2_is_d1_minus_sigma_sqrt_t() {
        let params = PricingParameters::new(105.0, 100.0, 0.03, 0.25, 0.75).unwrap();
        let (d1, d2) = bs_intermediate_terms(&params).unwrap();
        assert!((d1 - d2 - 0.25 * 0.75_f64.sqrt()).abs() < 1e-14);
    }

    #[test]
    fn d2_matches_its_own_closed_form() {
        let params = PricingParameters::new(80.0, 95.0, 0.07, 0.4, 0.3).unwrap();
        let (_, d2) = bs_intermediate_terms(&params).unwrap();
        let direct = ((80.0_f64 / 95.0).ln() + (0.07 - 0.4 * 0.4 / 2.0) * 0.3)
            / (0.4 * 0.3_f64.sqrt());
        assert!((d2 - direct).abs() < 1e-12);
    }

    #[test]
    fn at_the_money_zero_rate_terms_are_symmetric() {
        let params = PricingParameters::new(50.0, 50.0, 0.0, 0.3, 1.0).unwrap();
        let (d1, d2) = bs_intermediate_terms(&params).unwrap();
        assert!((d1 - 0.15).abs() < 1e-14);
        assert!((d2 + 0.15).abs() < 1e-14);
    }

    #[test]
    fn engine_dispatches_on_kind() {
        let engine = PricingEngine::new();
        let params = PricingParameters::default();
        let both = engine.price_both(&params).unwrap();
        assert_eq!(engine.price(&params, OptionKind::Call).unwrap(), both.call_price);
        assert_eq!(engine.price(&params, OptionKind::Put).unwrap(), both.put_price);
    }
}
