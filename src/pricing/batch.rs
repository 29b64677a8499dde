//! Pricing many parameter sets at once, with CSV import and export.

use std::cmp::Ordering;
use std::io;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::models::bs::PricingEngine;
use crate::pricing::types::{PricingParameters, PricingResult};

/// Price call and put for every parameter set.
///
/// Fails on the first set outside the model domain; no partial results are
/// returned. Results are sorted by strike, then by underlying price.
pub fn price_batch(
    engine: &PricingEngine,
    params: &[PricingParameters],
) -> Result<Vec<PricingResult>, DomainError> {
    let mut results = params
        .iter()
        .map(|p| engine.price_both(p))
        .collect::<Result<Vec<_>, _>>()?;

    results.sort_by(|a, b| {
        a.params
            .strike_price
            .partial_cmp(&b.params.strike_price)
            .unwrap_or(Ordering::Equal)
            .then(
                a.params
                    .underlying_price
                    .partial_cmp(&b.params.underlying_price)
                    .unwrap_or(Ordering::Equal),
            )
    });
    Ok(results)
}

/// Flat CSV layout of a priced row.
#[derive(Debug, Serialize)]
struct ResultRow {
    underlying_price: f64,
    strike_price: f64,
    risk_free_rate: f64,
    volatility: f64,
    time_to_maturity: f64,
    call_price: f64,
    put_price: f64,
}

impl From<&PricingResult> for ResultRow {
    fn from(r: &PricingResult) -> Self {
        ResultRow {
            underlying_price: r.params.underlying_price,
            strike_price: r.params.strike_price,
            risk_free_rate: r.params.risk_free_rate,
            volatility: r.params.volatility,
            time_to_maturity: r.params.time_to_maturity,
            call_price: r.call_price,
            put_price: r.put_price,
        }
    }
}

/// Input CSV row; extra columns are ignored.
#[derive(Debug, Deserialize)]
struct ParameterRow {
    underlying_price: f64,
    strike_price: f64,
    risk_free_rate: f64,
    volatility: f64,
    time_to_maturity: f64,
}

/// Read parameter sets from CSV with a header row naming the five inputs.
///
/// Rows are parsed as numbers but not validated against the model domain;
/// [`price_batch`] does that.
pub fn read_parameters_csv<R: io::Read>(reader: R) -> Result<Vec<PricingParameters>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut params = Vec::new();
    for (line, result) in rdr.deserialize().enumerate() {
        let row: ParameterRow =
            result.with_context(|| format!("invalid parameter row {}", line + 1))?;
        params.push(PricingParameters {
            underlying_price: row.underlying_price,
            strike_price: row.strike_price,
            risk_free_rate: row.risk_free_rate,
            volatility: row.volatility,
            time_to_maturity: row.time_to_maturity,
        });
    }
    Ok(params)
}

/// Write priced rows as CSV: the five inputs followed by `call_price,put_price`.
pub fn write_results_csv<W: io::Write>(writer: W, results: &[PricingResult]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for result in results {
        wtr.serialize(ResultRow::from(result))
            .context("failed to serialize pricing result")?;
    }
    wtr.flush().context("failed to flush results CSV")?;
    Ok(())
}
