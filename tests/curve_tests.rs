mod test_utils;

use bs_dashboard_lib::{
    price_call, price_curve, price_put, CurveGrid, OptionKind, Parameter, PricingEngine,
    PricingParameters,
};
use test_utils::params;

/// The default curve has 100 strictly increasing x-samples from 0.5 S to 1.5 S
/// inclusive, and each y-value is the call price at that underlying.
#[test]
fn test_call_curve_shape() {
    let p = params(164.0, 165.0, 0.0521, 0.29, 0.0959);
    let curve = price_curve(&p, OptionKind::Call).unwrap();

    assert_eq!(curve.kind, OptionKind::Call);
    assert_eq!(curve.len(), 100);

    let xs: Vec<f64> = curve.underlying_prices().collect();
    assert!((xs[0] - 82.0).abs() < 1e-12, "first sample {}", xs[0]);
    assert!((xs[99] - 246.0).abs() < 1e-12, "last sample {}", xs[99]);
    assert!(xs.windows(2).all(|w| w[1] > w[0]), "x samples must increase");

    let step = (246.0 - 82.0) / 99.0;
    for (i, x) in xs.iter().enumerate() {
        assert!((x - (82.0 + step * i as f64)).abs() < 1e-9, "uneven spacing at {}", i);
    }

    for point in &curve.points {
        let expected = price_call(&p.with_underlying(point.underlying_price)).unwrap();
        assert!(
            (point.option_price - expected).abs() < 1e-12,
            "curve value {} differs from direct price {} at S={}",
            point.option_price,
            expected,
            point.underlying_price
        );
    }
}

#[test]
fn test_put_curve_matches_pointwise_prices() {
    let p = PricingParameters::default();
    let curve = price_curve(&p, OptionKind::Put).unwrap();
    assert_eq!(curve.kind, OptionKind::Put);

    for point in &curve.points {
        let expected = price_put(&p.with_underlying(point.underlying_price)).unwrap();
        assert!((point.option_price - expected).abs() < 1e-12);
    }
}

/// Call is non-decreasing and put non-increasing in S for fixed K, r, sigma, T.
#[test]
fn test_curve_monotonicity() {
    let cases = [
        params(100.0, 100.0, 0.05, 0.2, 0.5),
        params(164.0, 165.0, 0.0521, 0.29, 0.0959),
        params(10.0, 500.0, 0.0, 0.01, 0.01),
        params(900.0, 100.0, 1.0, 1.0, 1.0),
        params(50.0, 55.0, 0.25, 0.6, 0.75),
    ];
    let engine = PricingEngine::with_grid(CurveGrid::with_samples(250));

    for p in cases {
        let calls: Vec<f64> = engine
            .price_curve(&p, OptionKind::Call)
            .unwrap()
            .option_prices()
            .collect();
        let puts: Vec<f64> = engine
            .price_curve(&p, OptionKind::Put)
            .unwrap()
            .option_prices()
            .collect();

        assert!(
            calls.windows(2).all(|w| w[1] >= w[0] - 1e-12),
            "call curve decreases for {:?}",
            p
        );
        assert!(
            puts.windows(2).all(|w| w[1] <= w[0] + 1e-12),
            "put curve increases for {:?}",
            p
        );
    }
}

#[test]
fn test_custom_grid() {
    let grid = CurveGrid {
        samples: 11,
        lower_factor: 0.8,
        upper_factor: 1.2,
    };
    let engine = PricingEngine::with_grid(grid);
    assert_eq!(engine.grid(), &grid);

    let curve = engine.price_curve(&params(100.0, 100.0, 0.05, 0.2, 0.5), OptionKind::Call).unwrap();
    assert_eq!(curve.len(), 11);
    let (x_min, x_max) = curve.x_range().unwrap();
    assert!((x_min - 80.0).abs() < 1e-12 && (x_max - 120.0).abs() < 1e-12);

    let (y_min, y_max) = curve.y_range().unwrap();
    assert_eq!(y_min, curve.points[0].option_price);
    assert_eq!(y_max, curve.points[10].option_price);
}

/// A grid reaching zero underlying surfaces the domain error of the sample.
#[test]
fn test_grid_reaching_zero_is_rejected() {
    let grid = CurveGrid {
        samples: 5,
        lower_factor: 0.0,
        upper_factor: 1.0,
    };
    let err = PricingEngine::with_grid(grid)
        .price_curve(&PricingParameters::default(), OptionKind::Put)
        .unwrap_err();
    assert_eq!(err.parameter(), Parameter::UnderlyingPrice);
}

/// Curves are rebuilt on every call: changing an input changes the curve.
#[test]
fn test_curves_follow_inputs() {
    let engine = PricingEngine::new();
    let base = PricingParameters::default();
    let first = engine.price_curve(&base, OptionKind::Call).unwrap();
    let again = engine.price_curve(&base, OptionKind::Call).unwrap();
    assert_eq!(first, again);

    let more_vol = engine
        .price_curve(&base.with(Parameter::Volatility, 0.5), OptionKind::Call)
        .unwrap();
    assert!(more_vol
        .option_prices()
        .zip(first.option_prices())
        .all(|(high, low)| high > low));
}

#[test]
fn test_curve_csv_export() {
    let curve = price_curve(&PricingParameters::default(), OptionKind::Put).unwrap();
    let mut buffer = Vec::new();
    curve.write_csv(&mut buffer).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("underlying_price,option_price"));
    assert_eq!(lines.next().map(|l| l.starts_with("50")), Some(true));
    assert_eq!(lines.count(), 99);
}
