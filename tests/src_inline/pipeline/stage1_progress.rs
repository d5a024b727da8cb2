use super::*;
use crate::error::ScoringError;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_increasing_scale() {
    assert_eq!(compute_progress(85.0, 50.0, 85.0, Direction::Increasing).unwrap(), 1.0);
    assert!(approx(
        compute_progress(67.5, 50.0, 85.0, Direction::Increasing).unwrap(),
        0.5
    ));
    assert_eq!(compute_progress(90.0, 50.0, 85.0, Direction::Increasing).unwrap(), 1.0);
    assert_eq!(compute_progress(40.0, 50.0, 85.0, Direction::Increasing).unwrap(), 0.0);
    assert_eq!(compute_progress(50.0, 50.0, 85.0, Direction::Increasing).unwrap(), 0.0);
}

#[test]
fn test_decreasing_scale() {
    assert!(approx(
        compute_progress(35.0, 60.0, 10.0, Direction::Decreasing).unwrap(),
        0.5
    ));
    assert_eq!(compute_progress(0.0, 10.0, 0.0, Direction::Decreasing).unwrap(), 1.0);
    assert_eq!(compute_progress(10.0, 10.0, 0.0, Direction::Decreasing).unwrap(), 0.0);
    assert_eq!(compute_progress(-5.0, 10.0, 0.0, Direction::Decreasing).unwrap(), 1.0);
    assert_eq!(compute_progress(15.0, 10.0, 0.0, Direction::Decreasing).unwrap(), 0.0);
}

#[test]
fn test_zero_length_scale_is_binary() {
    assert_eq!(compute_progress(5.0, 5.0, 5.0, Direction::Increasing).unwrap(), 1.0);
    assert_eq!(compute_progress(6.0, 5.0, 5.0, Direction::Increasing).unwrap(), 1.0);
    assert_eq!(compute_progress(4.0, 5.0, 5.0, Direction::Increasing).unwrap(), 0.0);
    assert_eq!(compute_progress(5.0, 5.0, 5.0, Direction::Decreasing).unwrap(), 1.0);
    assert_eq!(compute_progress(4.0, 5.0, 5.0, Direction::Decreasing).unwrap(), 1.0);
    assert_eq!(compute_progress(6.0, 5.0, 5.0, Direction::Decreasing).unwrap(), 0.0);
}

#[test]
fn test_string_direction() {
    assert_eq!(compute_progress_str(85.0, 50.0, 85.0, ">=").unwrap(), 1.0);
    assert!(approx(compute_progress_str(35.0, 60.0, 10.0, "<=").unwrap(), 0.5));
    let err = compute_progress_str(1.0, 0.0, 2.0, "~").unwrap_err();
    assert!(matches!(err, ScoringError::InvalidArgument(_)));
}

#[test]
fn test_non_finite_inputs_rejected() {
    assert!(compute_progress(f64::NAN, 0.0, 1.0, Direction::Increasing).is_err());
    assert!(compute_progress(0.5, f64::NEG_INFINITY, 1.0, Direction::Increasing).is_err());
    assert!(compute_progress(0.5, 0.0, f64::INFINITY, Direction::Decreasing).is_err());
}

#[test]
fn test_determinism_bits() {
    let a = compute_progress(61.3, 50.0, 85.0, Direction::Increasing).unwrap();
    let b = compute_progress(61.3, 50.0, 85.0, Direction::Increasing).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn test_extreme_finite_range_stays_in_unit_interval() {
    let max = f64::MAX;
    assert_eq!(compute_progress(max, -max, max, Direction::Increasing).unwrap(), 1.0);
    assert_eq!(compute_progress(0.0, -max, max, Direction::Increasing).unwrap(), 0.5);
    assert_eq!(compute_progress(-max, -max, max, Direction::Increasing).unwrap(), 0.0);
    assert_eq!(compute_progress(0.0, max, -max, Direction::Decreasing).unwrap(), 0.5);
    assert_eq!(compute_progress(-max, max, -max, Direction::Decreasing).unwrap(), 1.0);
}

#[test]
fn test_clip01_maps_nan_to_zero() {
    assert_eq!(clip01(f64::NAN), 0.0);
    assert_eq!(clip01(1.5), 1.0);
    assert_eq!(clip01(-0.5), 0.0);
}
