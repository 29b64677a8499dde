// Example: plot_price_curve.rs
// Prices a call and a put for the given inputs and writes each price-vs-stock
// curve as an SVG line chart and as CSV.
//
// Usage:
//     cargo run --example plot_price_curve -- [S K r sigma T] [--config dashboard.toml]
//
// Without inputs the dashboard defaults are used. Outputs are written to
// call_curve.svg, put_curve.svg, call_curve.csv and put_curve.csv in the
// working directory.

use std::env;
use std::fs::File;

use anyhow::{bail, Context, Result};
use bs_dashboard_lib::{
    write_curve_svg, ChartStyle, DashboardConfig, DashboardSnapshot, OptionKind, RawInputs,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let config = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let Some(path) = args.get(i + 1).cloned() else {
                bail!("--config needs a path");
            };
            args.drain(i..=i + 1);
            DashboardConfig::from_file(&path)?
        }
        None => DashboardConfig::high_resolution(),
    };

    let snapshot = match args.len() {
        0 => DashboardSnapshot::initial(&config)?,
        5 => {
            let raw = RawInputs::new(
                args[0].as_str(),
                args[1].as_str(),
                args[2].as_str(),
                args[3].as_str(),
                args[4].as_str(),
            );
            DashboardSnapshot::from_raw(&config, &raw)?
        }
        n => bail!("expected 0 or 5 inputs (S K r sigma T), got {}", n),
    };

    println!("{}", snapshot.summary(OptionKind::Call));
    println!("{}", snapshot.summary(OptionKind::Put));

    let style = ChartStyle::default();
    for kind in [OptionKind::Call, OptionKind::Put] {
        let curve = snapshot.curve(kind);

        let svg_path = format!("{}_curve.svg", kind);
        write_curve_svg(&svg_path, curve, &style)?;

        let csv_path = format!("{}_curve.csv", kind);
        let file = File::create(&csv_path).with_context(|| format!("failed to create {}", csv_path))?;
        curve.write_csv(file)?;

        info!(%kind, points = curve.len(), svg = %svg_path, csv = %csv_path, "wrote curve");
        println!("Chart saved to {} ({} points), data saved to {}", svg_path, curve.len(), csv_path);
    }

    Ok(())
}
