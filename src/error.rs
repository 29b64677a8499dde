//! Error types for the pricing engine and the dashboard input boundary.

use std::fmt;

use thiserror::Error;

/// The five model inputs, used to name the offending value in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    UnderlyingPrice,
    StrikePrice,
    RiskFreeRate,
    Volatility,
    TimeToMaturity,
}

impl Parameter {
    /// All inputs, in the order the dashboard presents them.
    pub const ALL: [Parameter; 5] = [
        Parameter::UnderlyingPrice,
        Parameter::StrikePrice,
        Parameter::RiskFreeRate,
        Parameter::Volatility,
        Parameter::TimeToMaturity,
    ];

    /// Conventional model symbol (S, K, r, sigma, T).
    pub fn symbol(&self) -> &'static str {
        match self {
            Parameter::UnderlyingPrice => "S",
            Parameter::StrikePrice => "K",
            Parameter::RiskFreeRate => "r",
            Parameter::Volatility => "sigma",
            Parameter::TimeToMaturity => "T",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Parameter::UnderlyingPrice => "underlying_price",
            Parameter::StrikePrice => "strike_price",
            Parameter::RiskFreeRate => "risk_free_rate",
            Parameter::Volatility => "volatility",
            Parameter::TimeToMaturity => "time_to_maturity",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.symbol())
    }
}

/// Rejection of a parameter set that lies outside the Black-Scholes domain.
///
/// This is the only failure the engine can produce: it performs no I/O, so
/// every error is an input-validation error raised before any arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    /// S, K, sigma or T was zero or negative.
    #[error("{parameter} must be strictly positive, got {value}")]
    NonPositive { parameter: Parameter, value: f64 },

    /// Any input was NaN or infinite.
    #[error("{parameter} must be finite, got {value}")]
    NonFinite { parameter: Parameter, value: f64 },

    /// Finite inputs whose combination leaves the range of `f64`, such as a
    /// discount factor `e^(-rT)` that overflows for a large negative rate.
    #[error("{parameter} = {value} overflows the pricing formula")]
    Overflow { parameter: Parameter, value: f64 },
}

impl DomainError {
    /// The input that violated its constraint.
    pub fn parameter(&self) -> Parameter {
        match self {
            DomainError::NonPositive { parameter, .. }
            | DomainError::NonFinite { parameter, .. }
            | DomainError::Overflow { parameter, .. } => *parameter,
        }
    }

    /// The rejected value.
    pub fn value(&self) -> f64 {
        match self {
            DomainError::NonPositive { value, .. }
            | DomainError::NonFinite { value, .. }
            | DomainError::Overflow { value, .. } => *value,
        }
    }
}

/// Errors raised while turning raw dashboard text into pricing parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} is not a number: {raw:?}")]
    NotANumber { field: Parameter, raw: String },

    #[error("{field} = {value} is outside the allowed range [{min}, {max}]")]
    OutOfBounds {
        field: Parameter,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_names_parameter() {
        let err = DomainError::NonPositive {
            parameter: Parameter::Volatility,
            value: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "volatility (sigma) must be strictly positive, got 0"
        );
        assert_eq!(err.parameter(), Parameter::Volatility);
        assert_eq!(err.value(), 0.0);
    }

    #[test]
    fn input_error_wraps_domain_error() {
        let domain = DomainError::NonFinite {
            parameter: Parameter::RiskFreeRate,
            value: f64::INFINITY,
        };
        let err: InputError = domain.into();
        assert_eq!(err.to_string(), domain.to_string());
    }
}
