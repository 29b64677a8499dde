#![allow(dead_code)] // each test binary uses a different subset

use std::fs::File;

use bs_dashboard_lib::{read_parameters_csv, PricingParameters};

/// Absolute tolerance for put-call parity checks
pub const PARITY_TOL: f64 = 1e-6;

/// Shorthand for a parameter set that is known to be valid.
pub fn params(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> PricingParameters {
    PricingParameters::new(s, k, r, sigma, t).expect("test parameters must be valid")
}

/// Parameter sets spread over the dashboard's slider ranges: deep in and out
/// of the money, short and long maturities, low and high volatility, zero and
/// high rates.
pub fn parameter_scenarios() -> Vec<PricingParameters> {
    let mut out = Vec::new();
    for &s in &[1.0, 25.0, 100.0, 164.0, 500.0, 1000.0] {
        for &k in &[1.0, 100.0, 165.0, 1000.0] {
            for &r in &[0.0, 0.0521, 0.25, 1.0] {
                for &sigma in &[0.01, 0.2, 0.29, 1.0] {
                    for &t in &[0.01, 0.0959, 0.5, 1.0] {
                        out.push(params(s, k, r, sigma, t));
                    }
                }
            }
        }
    }
    out
}

/// Load the fixture CSV shipped with the tests.
pub fn load_fixture_parameters() -> Vec<PricingParameters> {
    let file = File::open("tests/data/parameter_sets.csv").expect("fixture CSV must exist");
    read_parameters_csv(file).expect("fixture CSV must parse")
}

/// Values that violate the positivity constraint.
pub fn invalid_values() -> [f64; 3] {
    [0.0, -1.0, -1e-12]
}
