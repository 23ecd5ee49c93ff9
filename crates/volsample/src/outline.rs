//! Wireframe outlines of the sampled shapes.
//!
//! Pure geometry: each function returns line segments that trace the boundary of
//! the same region the samplers draw from, so a viewer can overlay sample points
//! on a matching frame. Nothing here draws or depends on a renderer.

use crate::sample::SampleError;
use crate::vecops::VectorExt;
use nalgebra::{Vector2, Vector3};
use std::f32::consts::TAU;

/// Fewest segments accepted for a circle approximation.
pub const MIN_SEGMENTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment2 {
    pub a: Vector2<f32>,
    pub b: Vector2<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment3 {
    pub a: Vector3<f32>,
    pub b: Vector3<f32>,
}

/// Tessellation of circles in outlines.
#[derive(Clone, Copy, Debug)]
pub struct OutlineCfg {
    /// Segments per full circle (rings of the cylinder, main ring of the torus).
    pub segments: usize,
    /// Segments per torus tube cross-section.
    pub minor_segments: usize,
}

impl Default for OutlineCfg {
    fn default() -> Self {
        Self {
            segments: 32,
            minor_segments: 12,
        }
    }
}

impl OutlineCfg {
    fn validate(&self) -> Result<(), SampleError> {
        if self.segments < MIN_SEGMENTS || self.minor_segments < MIN_SEGMENTS {
            return Err(SampleError::invalid(format!(
                "outline needs at least {MIN_SEGMENTS} segments per circle"
            )));
        }
        Ok(())
    }
}

#[inline]
fn ring_point(theta: f32, r: f32) -> Vector3<f32> {
    let (s, c) = theta.sin_cos();
    Vector3::new(c * r, 0.0, s * r)
}

/// Inner and outer circles of an annulus. The inner circle is omitted when `r_min == 0`.
pub fn annulus_outline(
    center: Vector2<f32>,
    r_min: f32,
    r_max: f32,
    cfg: OutlineCfg,
) -> Result<Vec<Segment2>, SampleError> {
    crate::sample::AnnulusParams::new(center, r_min, r_max)?;
    cfg.validate()?;
    let step = TAU / cfg.segments as f32;
    let circle = |r: f32| {
        (0..cfg.segments).map(move |i| {
            let (s0, c0) = (i as f32 * step).sin_cos();
            let (s1, c1) = ((i + 1) as f32 * step).sin_cos();
            Segment2 {
                a: center + Vector2::new(c0 * r, s0 * r),
                b: center + Vector2::new(c1 * r, s1 * r),
            }
        })
    };
    let mut out: Vec<Segment2> = circle(r_max).collect();
    if r_min > 0.0 {
        out.extend(circle(r_min));
    }
    Ok(out)
}

/// Top and bottom inner/outer rings plus vertical edges of a hollow cylinder.
///
/// Produces `6 * cfg.segments` segments.
pub fn annular_cylinder_outline(
    center: Vector3<f32>,
    r_min: f32,
    r_max: f32,
    height: f32,
    cfg: OutlineCfg,
) -> Result<Vec<Segment3>, SampleError> {
    crate::sample::AnnularCylinderParams::new(center, r_min, r_max, height)?;
    cfg.validate()?;
    let half = 0.5 * height;
    let step = TAU / cfg.segments as f32;
    let corners = |i: usize| {
        let theta = i as f32 * step;
        let outer = ring_point(theta, r_max);
        let inner = ring_point(theta, r_min);
        [
            center + outer.with_component(1, half),
            center + outer.with_component(1, -half),
            center + inner.with_component(1, half),
            center + inner.with_component(1, -half),
        ]
    };
    let mut out = Vec::with_capacity(6 * cfg.segments);
    let mut prev = corners(0);
    for i in 1..=cfg.segments {
        let cur = corners(i);
        for k in 0..4 {
            out.push(Segment3 {
                a: prev[k],
                b: cur[k],
            });
        }
        // Vertical edges, outer then inner.
        out.push(Segment3 {
            a: prev[0],
            b: prev[1],
        });
        out.push(Segment3 {
            a: prev[2],
            b: prev[3],
        });
        prev = cur;
    }
    Ok(out)
}

/// Main ring chords plus one tube cross-section per ring station.
///
/// Produces `cfg.segments * (1 + cfg.minor_segments)` segments.
pub fn torus_outline(
    center: Vector3<f32>,
    major_radius: f32,
    minor_radius: f32,
    cfg: OutlineCfg,
) -> Result<Vec<Segment3>, SampleError> {
    crate::sample::TorusParams::new(center, major_radius, minor_radius)?;
    cfg.validate()?;
    let major_step = TAU / cfg.segments as f32;
    let minor_step = TAU / cfg.minor_segments as f32;
    let mut out = Vec::with_capacity(cfg.segments * (1 + cfg.minor_segments));
    for i in 0..cfg.segments {
        let theta = i as f32 * major_step;
        let station = center + ring_point(theta, major_radius);
        out.push(Segment3 {
            a: station,
            b: center + ring_point((i + 1) as f32 * major_step, major_radius),
        });
        let tube = |j: usize| {
            let (s, c) = (j as f32 * minor_step).sin_cos();
            station + ring_point(theta, c * minor_radius).with_component(1, s * minor_radius)
        };
        let mut prev = tube(0);
        for j in 1..=cfg.minor_segments {
            let cur = tube(j);
            out.push(Segment3 { a: prev, b: cur });
            prev = cur;
        }
    }
    Ok(out)
}
