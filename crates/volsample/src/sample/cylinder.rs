//! Hollow cylinder sampler.
//!
//! The volume element separates as `dA · dy`, so the cross-section is the annulus
//! sampler unchanged and the height is a plain uniform lerp. Three draws: angle,
//! radius, height.

use super::draw::{annulus_radius, draw_angle, lerp, polar};
use super::types::{
    validate_height, validate_origin3, validate_radii, AnnularCylinderParams, SampleError,
};
use nalgebra::Vector3;
use rand::distributions::Distribution;
use rand::Rng;

#[inline]
pub(crate) fn draw_annular_cylinder<R: Rng + ?Sized>(
    origin: Vector3<f32>,
    r_min: f32,
    r_max: f32,
    height: f32,
    rng: &mut R,
) -> Vector3<f32> {
    let theta = draw_angle(rng);
    let r = annulus_radius(rng.gen::<f32>(), r_min, r_max);
    let half = 0.5 * height;
    let y = lerp(-half, half, rng.gen::<f32>());
    let xz = polar(theta, r);
    origin + Vector3::new(xz.x, y, xz.y)
}

/// Uniform-by-volume point in the hollow cylinder centred at `origin`, axis +Y.
///
/// Errors as `sample_annulus`, plus `height <= 0`.
pub fn sample_annular_cylinder<R: Rng + ?Sized>(
    origin: Vector3<f32>,
    r_min: f32,
    r_max: f32,
    height: f32,
    rng: &mut R,
) -> Result<Vector3<f32>, SampleError> {
    validate_origin3(&origin)?;
    validate_radii(r_min, r_max)?;
    validate_height(height)?;
    Ok(draw_annular_cylinder(origin, r_min, r_max, height, rng))
}

impl Distribution<Vector3<f32>> for AnnularCylinderParams {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3<f32> {
        draw_annular_cylinder(
            self.origin(),
            self.r_min(),
            self.r_max(),
            self.height(),
            rng,
        )
    }
}
