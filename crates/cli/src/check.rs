//! Radial statistics over a sample table.
//!
//! Distances are measured from `origin` in the sampling plane: XY for planar
//! tables, XZ (around the +Y axis) for spatial ones.

use crate::table::Points;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RadialReport {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    /// Counts per equal-area ring on `[r_min, r_max]`, when bounds are given.
    pub rings: Option<Vec<usize>>,
    /// Largest relative deviation of a ring count from the mean.
    pub max_ring_deviation: Option<f64>,
}

pub fn radial_distances(points: &Points, origin: [f64; 3]) -> Vec<f64> {
    match points {
        Points::Planar(v) => v
            .iter()
            .map(|p| (p[0] - origin[0]).hypot(p[1] - origin[1]))
            .collect(),
        Points::Spatial(v) => v
            .iter()
            .map(|p| (p[0] - origin[0]).hypot(p[2] - origin[2]))
            .collect(),
    }
}

/// Counts per equal-area ring: ring `k` of `n` spans
/// `r² ∈ [lo² + k/n (hi² − lo²), lo² + (k+1)/n (hi² − lo²))`.
/// Distances outside `[lo, hi]` go to the nearest end ring.
pub fn equal_area_counts(radii: &[f64], lo: f64, hi: f64, rings: usize) -> Vec<usize> {
    let mut counts = vec![0usize; rings];
    if rings == 0 {
        return counts;
    }
    let (lo2, hi2) = (lo * lo, hi * hi);
    for &r in radii {
        let t = (r * r - lo2) / (hi2 - lo2);
        let k = (t * rings as f64).floor().clamp(0.0, (rings - 1) as f64) as usize;
        counts[k] += 1;
    }
    counts
}

pub fn radial_report(
    points: &Points,
    origin: [f64; 3],
    bounds: Option<(f64, f64)>,
    rings: usize,
) -> RadialReport {
    let radii = radial_distances(points, origin);
    let min = radii.iter().copied().fold(f64::INFINITY, f64::min);
    let max = radii.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let ring_counts = bounds
        .filter(|(lo, hi)| hi > lo && rings > 0)
        .map(|(lo, hi)| equal_area_counts(&radii, lo, hi, rings));
    let max_ring_deviation = ring_counts.as_ref().and_then(|c| {
        let mean = radii.len() as f64 / c.len() as f64;
        (mean > 0.0).then(|| {
            c.iter()
                .map(|&n| ((n as f64) - mean).abs() / mean)
                .fold(0.0, f64::max)
        })
    });
    RadialReport {
        count: radii.len(),
        min,
        max,
        rings: ring_counts,
        max_ring_deviation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rings_split_by_area() {
        // Boundaries for lo=1, hi=3, 4 rings: sqrt(1+2k) = 1, √3, √5, √7, 3.
        let radii = [1.0, 1.5, 1.8, 2.5, 2.9, 3.0];
        assert_eq!(equal_area_counts(&radii, 1.0, 3.0, 4), vec![2, 1, 1, 2]);
    }

    #[test]
    fn spatial_distance_ignores_height() {
        let pts = Points::Spatial(vec![[3.0, 100.0, 4.0]]);
        assert_eq!(radial_distances(&pts, [0.0, 0.0, 0.0]), vec![5.0]);
    }

    #[test]
    fn report_without_bounds_has_no_rings() {
        let pts = Points::Planar(vec![[1.0, 0.0], [0.0, 2.0]]);
        let r = radial_report(&pts, [0.0; 3], None, 8);
        assert_eq!(r.count, 2);
        assert!((r.min - 1.0).abs() < 1e-12 && (r.max - 2.0).abs() < 1e-12);
        assert!(r.rings.is_none() && r.max_ring_deviation.is_none());
    }
}
