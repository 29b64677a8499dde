use tracing::debug;

use crate::dashboard::config::DashboardConfig;
use crate::dashboard::input::{parse_inputs, RawInputs};
use crate::error::{DomainError, InputError};
use crate::models::bs::PricingEngine;
use crate::pricing::curve::PriceCurve;
use crate::pricing::types::{OptionKind, PricingParameters};

/// Everything the dashboard shows for one set of slider positions.
///
/// A snapshot is rebuilt from scratch on every input change; nothing carries
/// over from the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub params: PricingParameters,
    pub call_price: f64,
    pub put_price: f64,
    pub call_curve: PriceCurve,
    pub put_curve: PriceCurve,
    pub price_decimals: usize,
}

impl DashboardSnapshot {
    /// Price both sides and sample both curves with `engine`.
    pub fn build(
        engine: &PricingEngine,
        params: PricingParameters,
        price_decimals: usize,
    ) -> Result<Self, DomainError> {
        let priced = engine.price_both(&params)?;
        let call_curve = engine.price_curve(&params, OptionKind::Call)?;
        let put_curve = engine.price_curve(&params, OptionKind::Put)?;

        debug!(
            call = priced.call_price,
            put = priced.put_price,
            samples = call_curve.len(),
            "built dashboard snapshot"
        );

        Ok(Self {
            params,
            call_price: priced.call_price,
            put_price: priced.put_price,
            call_curve,
            put_curve,
            price_decimals,
        })
    }

    /// Snapshot for already-numeric inputs under `config`.
    pub fn for_params(config: &DashboardConfig, params: PricingParameters) -> Result<Self, DomainError> {
        Self::build(&config.engine(), params, config.price_decimals)
    }

    /// Snapshot for the configured initial slider positions.
    pub fn initial(config: &DashboardConfig) -> Result<Self, DomainError> {
        Self::for_params(config, config.defaults)
    }

    /// Parse raw text fields and build the snapshot.
    pub fn from_raw(config: &DashboardConfig, raw: &RawInputs) -> Result<Self, InputError> {
        let params = parse_inputs(raw, config)?;
        Ok(Self::for_params(config, params)?)
    }

    pub fn price(&self, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => self.call_price,
            OptionKind::Put => self.put_price,
        }
    }

    pub fn curve(&self, kind: OptionKind) -> &PriceCurve {
        match kind {
            OptionKind::Call => &self.call_curve,
            OptionKind::Put => &self.put_curve,
        }
    }

    /// Price formatted with the configured number of decimals.
    pub fn display(&self, kind: OptionKind) -> String {
        format!("{:.*}", self.price_decimals, self.price(kind))
    }

    pub fn call_display(&self) -> String {
        self.display(OptionKind::Call)
    }

    pub fn put_display(&self) -> String {
        self.display(OptionKind::Put)
    }

    /// Result sentence shown under the sliders.
    pub fn summary(&self, kind: OptionKind) -> String {
        format!(
            "Given the input parameters, the {} option price is: {}",
            kind,
            self.display(kind)
        )
    }
}
