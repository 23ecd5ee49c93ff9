//! Planar samplers: annulus, disk, circle edge.
//!
//! Draw order is angle first, then radius. The annulus costs exactly two draws.

use super::draw::{annulus_radius, disk_radius, draw_angle, polar};
use super::types::{validate_origin2, validate_radii, AnnulusParams, SampleError};
use nalgebra::Vector2;
use rand::distributions::Distribution;
use rand::Rng;

#[inline]
pub(crate) fn draw_annulus<R: Rng + ?Sized>(
    origin: Vector2<f32>,
    r_min: f32,
    r_max: f32,
    rng: &mut R,
) -> Vector2<f32> {
    let theta = draw_angle(rng);
    let r = annulus_radius(rng.gen::<f32>(), r_min, r_max);
    origin + polar(theta, r)
}

/// Uniform-by-area point in the annulus `r_min <= |p − origin| <= r_max`.
///
/// Errors if a radius is negative or non-finite, or if `r_max <= r_min`. No draws
/// are consumed on error.
pub fn sample_annulus<R: Rng + ?Sized>(
    origin: Vector2<f32>,
    r_min: f32,
    r_max: f32,
    rng: &mut R,
) -> Result<Vector2<f32>, SampleError> {
    validate_origin2(&origin)?;
    validate_radii(r_min, r_max)?;
    Ok(draw_annulus(origin, r_min, r_max, rng))
}

/// Uniform-by-area point in the disk of `radius` around `origin`. Two draws.
pub fn sample_disk<R: Rng + ?Sized>(
    origin: Vector2<f32>,
    radius: f32,
    rng: &mut R,
) -> Result<Vector2<f32>, SampleError> {
    validate_origin2(&origin)?;
    if !radius.is_finite() || radius <= 0.0 {
        return Err(SampleError::invalid(format!(
            "radius must be finite and > 0, got {radius}"
        )));
    }
    let theta = draw_angle(rng);
    let r = disk_radius(rng.gen::<f32>(), radius);
    Ok(origin + polar(theta, r))
}

/// Uniform point on the circle `|p − origin| = radius`. One draw.
pub fn sample_circle_edge<R: Rng + ?Sized>(
    origin: Vector2<f32>,
    radius: f32,
    rng: &mut R,
) -> Result<Vector2<f32>, SampleError> {
    validate_origin2(&origin)?;
    if !radius.is_finite() || radius < 0.0 {
        return Err(SampleError::invalid(format!(
            "radius must be finite and >= 0, got {radius}"
        )));
    }
    Ok(origin + polar(draw_angle(rng), radius))
}

impl Distribution<Vector2<f32>> for AnnulusParams {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector2<f32> {
        draw_annulus(self.origin(), self.r_min(), self.r_max(), rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn disk_stays_inside() {
        let mut rng = StdRng::seed_from_u64(11);
        let o = Vector2::new(-2.0, 4.0);
        for _ in 0..2000 {
            let p = sample_disk(o, 1.5, &mut rng).unwrap();
            assert!((p - o).norm() <= 1.5 + 1e-5);
        }
        assert!(sample_disk(o, 0.0, &mut rng).is_err());
    }

    #[test]
    fn circle_edge_is_on_circle() {
        let mut rng = StdRng::seed_from_u64(12);
        let o = Vector2::new(0.5, 0.5);
        for _ in 0..2000 {
            let p = sample_circle_edge(o, 3.0, &mut rng).unwrap();
            assert!(((p - o).norm() - 3.0).abs() < 1e-5);
        }
        assert!(sample_circle_edge(o, -1.0, &mut rng).is_err());
    }

    #[test]
    fn params_and_free_function_agree() {
        let o = Vector2::new(1.0, -1.0);
        let params = AnnulusParams::new(o, 0.5, 2.0).unwrap();
        let mut a = StdRng::seed_from_u64(5);
        let mut b = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let p = params.sample(&mut a);
            let q = sample_annulus(o, 0.5, 2.0, &mut b).unwrap();
            assert_eq!(p, q);
        }
    }

    #[test]
    fn sample_iter_yields_points_in_ring() {
        let params = AnnulusParams::new(Vector2::zeros(), 1.0, 2.0).unwrap();
        let rng = StdRng::seed_from_u64(9);
        let pts: Vec<Vector2<f32>> = rng.sample_iter(params).take(500).collect();
        assert_eq!(pts.len(), 500);
        assert!(pts.iter().all(|p| {
            let d = p.norm();
            d >= 1.0 - 1e-5 && d <= 2.0 + 1e-5
        }));
    }
}
