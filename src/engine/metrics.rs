//! Path metrics: detour index and cumulative turning
//!
//! Both metrics operate on the valid (non-null) points of a segment path and
//! resolve degenerate inputs to a neutral 0.0 instead of failing. Incomplete
//! position data must not look anomalous.

use super::geo::{bearing_deg, distance_km};
use super::types::PathPoint;

/// Drop points with a missing coordinate, preserving order
fn valid_points(path: &[PathPoint]) -> Vec<(f64, f64)> {
    path.iter().filter_map(|p| p.valid()).collect()
}

/// Detour index of a path: 1 - direct/total great-circle distance.
///
/// 0.0 for a perfectly straight path, approaching 1.0 for increasingly
/// circuitous travel. Fewer than two valid points, or a total length of
/// exactly zero, yields 0.0.
pub fn irregularity(path: &[PathPoint]) -> f64 {
    let points = valid_points(path);
    if points.len() < 2 {
        return 0.0;
    }

    let total_km: f64 = points
        .windows(2)
        .map(|w| distance_km(w[0].0, w[0].1, w[1].0, w[1].1))
        .sum();
    if total_km == 0.0 {
        return 0.0;
    }

    let (first, last) = (points[0], points[points.len() - 1]);
    let direct_km = distance_km(first.0, first.1, last.0, last.1);

    1.0 - direct_km / total_km
}

/// Sum of absolute bearing changes across consecutive legs of a path, in
/// degrees. Each change is normalized to the shorter angular turn (at most
/// 180 degrees per leg pair). Fewer than three valid points yields 0.0.
pub fn total_turning_deg(path: &[PathPoint]) -> f64 {
    let points = valid_points(path);
    if points.len() < 3 {
        return 0.0;
    }

    let bearings: Vec<f64> = points
        .windows(2)
        .map(|w| bearing_deg(w[0].0, w[0].1, w[1].0, w[1].1))
        .collect();

    bearings
        .windows(2)
        .map(|b| {
            let delta = (b[1] - b[0]).abs();
            if delta > 180.0 { 360.0 - delta } else { delta }
        })
        .sum()
}
