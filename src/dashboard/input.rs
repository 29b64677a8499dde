//! Conversion of raw dashboard text fields into validated pricing parameters.
//!
//! Text is always parsed into `f64` before it is compared or used; a field
//! that is not a finite number is rejected with [`InputError::NotANumber`].

use tracing::warn;

use crate::dashboard::config::DashboardConfig;
use crate::error::{InputError, Parameter};
use crate::pricing::types::PricingParameters;

/// The five inputs exactly as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    pub underlying_price: String,
    pub strike_price: String,
    pub risk_free_rate: String,
    pub volatility: String,
    pub time_to_maturity: String,
}

impl RawInputs {
    pub fn new(
        underlying_price: impl Into<String>,
        strike_price: impl Into<String>,
        risk_free_rate: impl Into<String>,
        volatility: impl Into<String>,
        time_to_maturity: impl Into<String>,
    ) -> Self {
        Self {
            underlying_price: underlying_price.into(),
            strike_price: strike_price.into(),
            risk_free_rate: risk_free_rate.into(),
            volatility: volatility.into(),
            time_to_maturity: time_to_maturity.into(),
        }
    }

    /// Text form of an existing parameter set, e.g. to prefill the form.
    pub fn from_params(params: &PricingParameters) -> Self {
        Self::new(
            params.underlying_price.to_string(),
            params.strike_price.to_string(),
            params.risk_free_rate.to_string(),
            params.volatility.to_string(),
            params.time_to_maturity.to_string(),
        )
    }

    pub fn get(&self, parameter: Parameter) -> &str {
        match parameter {
            Parameter::UnderlyingPrice => &self.underlying_price,
            Parameter::StrikePrice => &self.strike_price,
            Parameter::RiskFreeRate => &self.risk_free_rate,
            Parameter::Volatility => &self.volatility,
            Parameter::TimeToMaturity => &self.time_to_maturity,
        }
    }
}

/// Parse one field into a finite number.
pub fn parse_field(field: Parameter, raw: &str) -> Result<f64, InputError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::NotANumber {
            field,
            raw: raw.to_string(),
        }),
    }
}

/// Parse all five fields, apply the slider ranges of `config`, then check the
/// result against the pricing domain.
///
/// Out-of-range values are clamped when `config.clamp_inputs` is set and
/// rejected otherwise. A value can be inside its slider range and still be
/// outside the model domain (a volatility slider starting at 0, say); that
/// case surfaces as [`InputError::Domain`].
pub fn parse_inputs(raw: &RawInputs, config: &DashboardConfig) -> Result<PricingParameters, InputError> {
    let mut params = config.defaults;

    for parameter in Parameter::ALL {
        let mut value = parse_field(parameter, raw.get(parameter))?;
        let bounds = config.bounds.get(parameter);

        if !bounds.contains(value) {
            if !config.clamp_inputs {
                return Err(InputError::OutOfBounds {
                    field: parameter,
                    value,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
            let clamped = bounds.clamp(value);
            warn!(%parameter, value, clamped, "input outside slider range, clamping");
            value = clamped;
        }
        if config.snap_to_step {
            value = bounds.snap(value);
        }

        params = params.with(parameter, value);
    }

    params.validate()?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    #[test]
    fn text_is_parsed_not_compared() {
        let err = parse_field(Parameter::StrikePrice, "165 dollars").unwrap_err();
        assert_eq!(
            err,
            InputError::NotANumber {
                field: Parameter::StrikePrice,
                raw: "165 dollars".to_string()
            }
        );
        assert_eq!(parse_field(Parameter::StrikePrice, " 165.5 ").unwrap(), 165.5);
    }

    #[test]
    fn non_finite_text_is_not_a_number() {
        assert!(parse_field(Parameter::Volatility, "NaN").is_err());
        assert!(parse_field(Parameter::Volatility, "inf").is_err());
        assert!(parse_field(Parameter::Volatility, "").is_err());
    }

    #[test]
    fn zero_volatility_passes_slider_but_fails_domain() {
        let raw = RawInputs::new("100", "100", "0.05", "0", "0.5");
        let err = parse_inputs(&raw, &DashboardConfig::default()).unwrap_err();
        assert_eq!(
            err,
            InputError::Domain(DomainError::NonPositive {
                parameter: Parameter::Volatility,
                value: 0.0
            })
        );
    }
}
