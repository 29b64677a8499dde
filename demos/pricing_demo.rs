// demos/pricing_demo.rs

//! Demonstration of Black-Scholes pricing as the dashboard uses it
//!
//! This example shows how to:
//! 1. Build the snapshot for the dashboard's initial slider positions
//! 2. Parse raw text inputs into validated parameters
//! 3. Check put-call parity on the computed prices
//! 4. Price a batch of scenarios and print them as a table

use anyhow::Result;
use bs_dashboard_lib::{
    default_configs, price_batch, DashboardSnapshot, OptionKind, PricingParameters, RawInputs,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let config = default_configs::standard();

    println!("\nStep 1: Initial dashboard state...");
    let initial = DashboardSnapshot::initial(&config)?;
    print_snapshot(&initial);

    println!("\nStep 2: Parsing user input...");
    let raw = RawInputs::new("164", "165", "0.0521", "0.29", "0.0959");
    let snapshot = DashboardSnapshot::from_raw(&config, &raw)?;
    print_snapshot(&snapshot);

    let p = snapshot.params;
    let gap = snapshot.call_price - snapshot.put_price;
    let forward = p.underlying_price - p.strike_price * p.discount_factor();
    println!("  Put-call parity: C - P = {:.6}, S - K e^(-rT) = {:.6}", gap, forward);

    println!("\nStep 3: Rejected inputs...");
    for bad in [
        RawInputs::new("100", "abc", "0.05", "0.2", "0.5"),
        RawInputs::new("100", "100", "0.05", "0", "0.5"),
    ] {
        match DashboardSnapshot::from_raw(&config, &bad) {
            Ok(_) => println!("  unexpectedly accepted {:?}", bad),
            Err(e) => println!("  rejected: {}", e),
        }
    }

    println!("\nStep 4: Batch of scenarios...");
    let scenarios = create_scenarios();
    let results = price_batch(&config.engine(), &scenarios)?;

    println!(
        "{:<8} {:<8} {:<8} {:<8} {:<8} {:<10} {:<10}",
        "S", "K", "r", "sigma", "T", "Call", "Put"
    );
    println!("{}", "-".repeat(66));
    for r in &results {
        println!(
            "{:<8.2} {:<8.2} {:<8.4} {:<8.2} {:<8.4} {:<10.4} {:<10.4}",
            r.params.underlying_price,
            r.params.strike_price,
            r.params.risk_free_rate,
            r.params.volatility,
            r.params.time_to_maturity,
            r.call_price,
            r.put_price
        );
    }

    println!("\nDemo completed successfully!");
    Ok(())
}

fn print_snapshot(snapshot: &DashboardSnapshot) {
    let p = &snapshot.params;
    println!(
        "  Inputs: S={} K={} r={} sigma={} T={}",
        p.underlying_price, p.strike_price, p.risk_free_rate, p.volatility, p.time_to_maturity
    );
    println!("  {}", snapshot.summary(OptionKind::Call));
    println!("  {}", snapshot.summary(OptionKind::Put));

    let curve = &snapshot.call_curve;
    if let (Some(first), Some(last)) = (curve.points.first(), curve.points.last()) {
        println!(
            "  Call curve: {} points, C({:.2}) = {:.4} .. C({:.2}) = {:.4}",
            curve.len(),
            first.underlying_price,
            first.option_price,
            last.underlying_price,
            last.option_price
        );
    }
}

fn create_scenarios() -> Vec<PricingParameters> {
    let mut scenarios = Vec::new();
    for &strike in &[80.0, 90.0, 100.0, 110.0, 120.0] {
        for &volatility in &[0.15, 0.3] {
            scenarios.push(PricingParameters {
                underlying_price: 100.0,
                strike_price: strike,
                risk_free_rate: 0.05,
                volatility,
                time_to_maturity: 0.5,
            });
        }
    }
    scenarios
}
