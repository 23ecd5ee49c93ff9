//! Solid torus sampler.
//!
//! Model
//! - Major angle `θ` picks a station on the ring (XZ plane).
//! - The tube cross-section at `θ` is a disk of radius `a` in the plane spanned by
//!   the radial direction and +Y; a point in it is drawn disk-uniformly.
//! - Position: `x = (R + r cos φ) cos θ`, `z = (R + r cos φ) sin θ`, `y = r sin φ`.
//!
//! Caveat
//! - The true volume element is `(R + r cos φ) r dr dφ dθ`. `Approximate` drops the
//!   `(R + r cos φ)` factor, so the inner half of the tube is oversampled relative
//!   to the outer half by up to `(R + a)/(R − a)`. It is the default and costs
//!   exactly three draws.
//! - `Exact` accepts a tube point with probability `(R + r cos φ)/(R + a)`, which
//!   restores the Jacobian. Expected attempts are `(R + a)/R`.
//! - `R + a` must be representable in f32; larger tori are rejected up front.

use super::draw::{disk_radius, draw_angle, polar};
use super::types::{validate_origin3, validate_torus, SampleError, TorusMode, TorusParams};
use nalgebra::Vector3;
use rand::distributions::Distribution;
use rand::Rng;

/// Tube offset `(r cos φ, r sin φ)`: first component radial, second along +Y.
#[inline]
fn draw_tube_offset<R: Rng + ?Sized>(minor: f32, rng: &mut R) -> (f32, f32) {
    let phi = draw_angle(rng);
    let r = disk_radius(rng.gen::<f32>(), minor);
    let t = polar(phi, r);
    (t.x, t.y)
}

#[inline]
pub(crate) fn draw_torus<R: Rng + ?Sized>(
    origin: Vector3<f32>,
    major: f32,
    minor: f32,
    mode: TorusMode,
    rng: &mut R,
) -> Vector3<f32> {
    let theta = draw_angle(rng);
    let (radial, up) = match mode {
        TorusMode::Approximate => draw_tube_offset(minor, rng),
        TorusMode::Exact => loop {
            let (radial, up) = draw_tube_offset(minor, rng);
            // (R + r cos φ)/(R + a), scaled by R so huge radii stay finite.
            let accept = (1.0 + radial / major) / (1.0 + minor / major);
            if rng.gen::<f32>() < accept {
                break (radial, up);
            }
        },
    };
    let ring = polar(theta, major + radial);
    origin + Vector3::new(ring.x, up, ring.y)
}

/// Point in the solid torus around `origin` (ring in XZ, axis +Y), `Approximate` mode.
///
/// Errors if `minor_radius < 0`, `minor_radius >= major_radius`, any input is
/// non-finite, or `major_radius + minor_radius` overflows. No draws are consumed on error.
pub fn sample_torus<R: Rng + ?Sized>(
    origin: Vector3<f32>,
    major_radius: f32,
    minor_radius: f32,
    rng: &mut R,
) -> Result<Vector3<f32>, SampleError> {
    sample_torus_with_mode(origin, major_radius, minor_radius, TorusMode::Approximate, rng)
}

/// `sample_torus` with an explicit tube sampling mode.
pub fn sample_torus_with_mode<R: Rng + ?Sized>(
    origin: Vector3<f32>,
    major_radius: f32,
    minor_radius: f32,
    mode: TorusMode,
    rng: &mut R,
) -> Result<Vector3<f32>, SampleError> {
    validate_origin3(&origin)?;
    validate_torus(major_radius, minor_radius)?;
    Ok(draw_torus(origin, major_radius, minor_radius, mode, rng))
}

impl Distribution<Vector3<f32>> for TorusParams {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3<f32> {
        draw_torus(
            self.origin(),
            self.major_radius(),
            self.minor_radius(),
            self.mode(),
            rng,
        )
    }
}
