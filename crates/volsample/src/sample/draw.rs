//! Shared angle and radius transforms.
//!
//! Every sampler is built from the same three pieces: a uniform angle, an
//! inverse-CDF radius, and a polar-to-Cartesian step. The radius transforms take
//! the uniform variate explicitly so they can be checked without an RNG.
//!
//! Area element in polar coordinates is `r dr dθ`, so the radial CDF on
//! `[r_min, r_max]` is `(r² − r_min²)/(r_max² − r_min²)`. Inverting gives
//! `r = sqrt(u (r_max² − r_min²) + r_min²)`, evaluated as
//! `r_max · sqrt(u (1 − k²) + k²)` with `k = r_min / r_max` so squaring never
//! leaves the f32 range.

use nalgebra::Vector2;
use rand::Rng;
use std::f32::consts::TAU;

/// One draw, mapped to `[0, 2π)`.
#[inline]
pub fn draw_angle<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen::<f32>() * TAU
}

/// Inverse CDF of the radius in an annulus, for `u ∈ [0, 1)`.
#[inline]
pub fn annulus_radius(u: f32, r_min: f32, r_max: f32) -> f32 {
    let k = r_min / r_max;
    let k2 = k * k;
    // Rounding may step a hair past 1 when u is close to 1.
    r_max * (u * (1.0 - k2) + k2).sqrt().min(1.0)
}

/// Inverse CDF of the radius in a disk (annulus with `r_min = 0`).
#[inline]
pub fn disk_radius(u: f32, radius: f32) -> f32 {
    u.sqrt() * radius
}

/// `r (cos θ, sin θ)`.
#[inline]
pub fn polar(theta: f32, r: f32) -> Vector2<f32> {
    let (s, c) = theta.sin_cos();
    Vector2::new(r * c, r * s)
}

/// Linear interpolation, `a` at `t = 0` and `b` at `t = 1`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
