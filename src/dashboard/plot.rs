//! SVG line charts of price curves.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use plotters::prelude::*;

use crate::pricing::curve::PriceCurve;
use crate::pricing::types::OptionKind;

/// Size and labels of an exported chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub x_label: String,
    /// Y-axis label; `None` derives "Call Option Price" / "Put Option Price"
    /// from the curve.
    pub y_label: Option<String>,
    pub line_color: (u8, u8, u8),
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 960,
            height: 720,
            title: "Black-Scholes Formula".to_string(),
            x_label: "Stock Price".to_string(),
            y_label: None,
            line_color: (31, 119, 180),
        }
    }
}

impl ChartStyle {
    fn y_label_for(&self, kind: OptionKind) -> String {
        self.y_label.clone().unwrap_or_else(|| match kind {
            OptionKind::Call => "Call Option Price".to_string(),
            OptionKind::Put => "Put Option Price".to_string(),
        })
    }
}

/// Draw `curve` as a line chart and return the SVG document.
pub fn render_curve_svg(curve: &PriceCurve, style: &ChartStyle) -> Result<String> {
    let (Some((x_min, x_max)), Some((y_lo, y_hi))) = (curve.x_range(), curve.y_range()) else {
        bail!("cannot plot an empty {} curve", curve.kind);
    };
    if x_max <= x_min {
        bail!("curve needs at least two distinct underlying prices to plot");
    }

    // Keep zero on the axis and leave headroom above the highest price
    let y_min = y_lo.min(0.0);
    let y_max = if y_hi > y_min { y_hi * 1.05 } else { y_min + 1.0 };

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (style.width, style.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .caption(&style.title, ("sans-serif", 28))
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        chart
            .configure_mesh()
            .x_desc(style.x_label.as_str())
            .y_desc(style.y_label_for(curve.kind))
            .draw()?;

        let (r, g, b) = style.line_color;
        chart.draw_series(std::iter::once(PathElement::new(
            curve.xy(),
            RGBColor(r, g, b).stroke_width(2),
        )))?;

        root.present()?;
    }
    Ok(svg)
}

/// Render `curve` and write the SVG to `path`.
pub fn write_curve_svg(path: impl AsRef<Path>, curve: &PriceCurve, style: &ChartStyle) -> Result<()> {
    let path = path.as_ref();
    let svg = render_curve_svg(curve, style)?;
    fs::write(path, svg).with_context(|| format!("failed to write chart {}", path.display()))
}
