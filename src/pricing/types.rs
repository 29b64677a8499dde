use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Parameter};

/// Inputs of the Black-Scholes formula for one European option.
///
/// The struct is a plain value: it is created per evaluation and never
/// mutated in place. Use [`PricingParameters::new`] to get a validated set, or
/// build the struct literally and let the pricing functions validate it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingParameters {
    /// Current price of the underlying asset (S)
    pub underlying_price: f64,
    /// Exercise price of the option (K)
    pub strike_price: f64,
    /// Annualised continuously-compounded risk-free rate (r)
    pub risk_free_rate: f64,
    /// Annualised volatility of log-returns (sigma)
    pub volatility: f64,
    /// Years until expiration (T)
    pub time_to_maturity: f64,
}

impl PricingParameters {
    /// Create a parameter set, rejecting anything outside the model domain.
    pub fn new(
        underlying_price: f64,
        strike_price: f64,
        risk_free_rate: f64,
        volatility: f64,
        time_to_maturity: f64,
    ) -> Result<Self, DomainError> {
        let params = Self {
            underlying_price,
            strike_price,
            risk_free_rate,
            volatility,
            time_to_maturity,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check every input against its constraint.
    ///
    /// All five values must be finite; S, K, sigma and T must also be strictly
    /// positive. The first violation found is reported, in the order S, K, r,
    /// sigma, T. Finite inputs are still rejected when the discounted strike
    /// `K e^(-rT)` or `sigma sqrt(T)` overflows `f64`.
    pub fn validate(&self) -> Result<(), DomainError> {
        for parameter in Parameter::ALL {
            let value = self.get(parameter);
            if !value.is_finite() {
                return Err(DomainError::NonFinite { parameter, value });
            }
            if parameter != Parameter::RiskFreeRate && value <= 0.0 {
                return Err(DomainError::NonPositive { parameter, value });
            }
        }
        if !(self.strike_price * self.discount_factor()).is_finite() {
            return Err(DomainError::Overflow {
                parameter: Parameter::RiskFreeRate,
                value: self.risk_free_rate,
            });
        }
        if !(self.volatility * self.time_to_maturity.sqrt()).is_finite() {
            return Err(DomainError::Overflow {
                parameter: Parameter::Volatility,
                value: self.volatility,
            });
        }
        Ok(())
    }

    /// Read one input by name.
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::UnderlyingPrice => self.underlying_price,
            Parameter::StrikePrice => self.strike_price,
            Parameter::RiskFreeRate => self.risk_free_rate,
            Parameter::Volatility => self.volatility,
            Parameter::TimeToMaturity => self.time_to_maturity,
        }
    }

    /// Copy of `self` with one input replaced.
    pub fn with(self, parameter: Parameter, value: f64) -> Self {
        let mut next = self;
        match parameter {
            Parameter::UnderlyingPrice => next.underlying_price = value,
            Parameter::StrikePrice => next.strike_price = value,
            Parameter::RiskFreeRate => next.risk_free_rate = value,
            Parameter::Volatility => next.volatility = value,
            Parameter::TimeToMaturity => next.time_to_maturity = value,
        }
        next
    }

    /// Copy of `self` with a different underlying price; used by the curve sweep.
    pub fn with_underlying(self, underlying_price: f64) -> Self {
        Self {
            underlying_price,
            ..self
        }
    }

    /// Discount factor e^(-rT).
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_maturity).exp()
    }
}

impl Default for PricingParameters {
    /// The dashboard's initial slider positions.
    fn default() -> Self {
        Self {
            underlying_price: 100.0,
            strike_price: 100.0,
            risk_free_rate: 0.05,
            volatility: 0.2,
            time_to_maturity: 0.5,
        }
    }
}

/// European option right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionKind::Call),
            "put" | "p" => Ok(OptionKind::Put),
            other => Err(anyhow::anyhow!("Invalid option type: {}", other)),
        }
    }
}

/// Call and put prices computed for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub params: PricingParameters,
    pub call_price: f64,
    pub put_price: f64,
}

impl PricingResult {
    pub fn price(&self, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => self.call_price,
            OptionKind::Put => self.put_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_reports_first_violation() {
        let params = PricingParameters {
            underlying_price: 100.0,
            strike_price: -1.0,
            risk_free_rate: 0.05,
            volatility: 0.0,
            time_to_maturity: 0.5,
        };
        assert_eq!(
            params.validate(),
            Err(DomainError::NonPositive {
                parameter: Parameter::StrikePrice,
                value: -1.0
            })
        );
    }

    #[test]
    fn negative_rate_is_allowed() {
        assert!(PricingParameters::new(100.0, 100.0, -0.01, 0.2, 0.5).is_ok());
    }

    #[test]
    fn nan_is_rejected() {
        let err = PricingParameters::new(100.0, 100.0, f64::NAN, 0.2, 0.5).unwrap_err();
        assert_eq!(err.parameter(), Parameter::RiskFreeRate);
        assert!(matches!(err, DomainError::NonFinite { .. }));
    }

    #[test]
    fn overflowing_discount_is_rejected() {
        let err = PricingParameters::new(100.0, 100.0, -1000.0, 0.2, 1.0).unwrap_err();
        assert_eq!(
            err,
            DomainError::Overflow {
                parameter: Parameter::RiskFreeRate,
                value: -1000.0
            }
        );
        assert!(PricingParameters::new(100.0, 100.0, -5.0, 0.2, 1.0).is_ok());
    }

    #[test]
    fn with_replaces_a_single_input() {
        let base = PricingParameters::default();
        let bumped = base.with(Parameter::Volatility, 0.35);
        assert_eq!(bumped.volatility, 0.35);
        assert_eq!(bumped.underlying_price, base.underlying_price);
        assert_eq!(base.with_underlying(80.0).underlying_price, 80.0);
    }

    #[test]
    fn option_kind_parses_short_and_long_forms() {
        assert_eq!("Call".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!(" p ".parse::<OptionKind>().unwrap(), OptionKind::Put);
        assert!("straddle".parse::<OptionKind>().is_err());
        assert_eq!(OptionKind::Put.to_string(), "put");
    }
}
