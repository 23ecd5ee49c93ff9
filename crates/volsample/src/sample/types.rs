//! Error type and validated shape parameters.
//!
//! - `SampleError`: the single failure kind (caller-supplied geometry is invalid).
//! - `AnnulusParams`, `AnnularCylinderParams`, `TorusParams`: validated once, then
//!   sampled any number of times through `rand::distributions::Distribution`.
//!
//! Validation never touches the random source, so a rejected call consumes no draws.

use nalgebra::{Vector2, Vector3};
use std::fmt;

/// Error type shared by all samplers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SampleError {
    InvalidParameter { reason: String },
}

impl SampleError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { reason } => write!(f, "invalid sampler parameter: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

fn finite2(p: &Vector2<f32>) -> bool {
    p.iter().all(|c| c.is_finite())
}

fn finite3(p: &Vector3<f32>) -> bool {
    p.iter().all(|c| c.is_finite())
}

/// Shared radial check for annulus and annular cylinder.
pub(crate) fn validate_radii(r_min: f32, r_max: f32) -> Result<(), SampleError> {
    if !(r_min.is_finite() && r_max.is_finite()) {
        return Err(SampleError::invalid("radii must be finite"));
    }
    if r_min < 0.0 || r_max < 0.0 {
        return Err(SampleError::invalid("radii must be >= 0"));
    }
    if r_max <= r_min {
        return Err(SampleError::invalid(format!(
            "r_max ({r_max}) must be > r_min ({r_min})"
        )));
    }
    Ok(())
}

pub(crate) fn validate_height(height: f32) -> Result<(), SampleError> {
    if !height.is_finite() || height <= 0.0 {
        return Err(SampleError::invalid(format!(
            "height must be finite and > 0, got {height}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_torus(major: f32, minor: f32) -> Result<(), SampleError> {
    if !(major.is_finite() && minor.is_finite()) {
        return Err(SampleError::invalid("torus radii must be finite"));
    }
    if minor < 0.0 {
        return Err(SampleError::invalid("minor_radius must be >= 0"));
    }
    if minor >= major {
        return Err(SampleError::invalid(format!(
            "minor_radius ({minor}) must be < major_radius ({major})"
        )));
    }
    if !(major + minor).is_finite() {
        return Err(SampleError::invalid(format!(
            "torus extent major_radius + minor_radius ({major} + {minor}) overflows f32"
        )));
    }
    Ok(())
}

pub(crate) fn validate_origin2(origin: &Vector2<f32>) -> Result<(), SampleError> {
    if !finite2(origin) {
        return Err(SampleError::invalid("origin must be finite"));
    }
    Ok(())
}

pub(crate) fn validate_origin3(origin: &Vector3<f32>) -> Result<(), SampleError> {
    if !finite3(origin) {
        return Err(SampleError::invalid("origin must be finite"));
    }
    Ok(())
}

/// Annulus `{ p : r_min <= |p - origin| <= r_max }` in the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnulusParams {
    origin: Vector2<f32>,
    r_min: f32,
    r_max: f32,
}

impl AnnulusParams {
    pub fn new(origin: Vector2<f32>, r_min: f32, r_max: f32) -> Result<Self, SampleError> {
        validate_origin2(&origin)?;
        validate_radii(r_min, r_max)?;
        Ok(Self {
            origin,
            r_min,
            r_max,
        })
    }
    #[inline]
    pub fn origin(&self) -> Vector2<f32> {
        self.origin
    }
    #[inline]
    pub fn r_min(&self) -> f32 {
        self.r_min
    }
    #[inline]
    pub fn r_max(&self) -> f32 {
        self.r_max
    }
    /// Area of the ring, `π (r_max² − r_min²)`.
    pub fn area(&self) -> f32 {
        std::f32::consts::PI * (self.r_max * self.r_max - self.r_min * self.r_min)
    }
}

/// Hollow cylinder centred at `origin`, axis along +Y, spanning `height` in total.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnularCylinderParams {
    origin: Vector3<f32>,
    r_min: f32,
    r_max: f32,
    height: f32,
}

impl AnnularCylinderParams {
    pub fn new(
        origin: Vector3<f32>,
        r_min: f32,
        r_max: f32,
        height: f32,
    ) -> Result<Self, SampleError> {
        validate_origin3(&origin)?;
        validate_radii(r_min, r_max)?;
        validate_height(height)?;
        Ok(Self {
            origin,
            r_min,
            r_max,
            height,
        })
    }
    #[inline]
    pub fn origin(&self) -> Vector3<f32> {
        self.origin
    }
    #[inline]
    pub fn r_min(&self) -> f32 {
        self.r_min
    }
    #[inline]
    pub fn r_max(&self) -> f32 {
        self.r_max
    }
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }
    pub fn volume(&self) -> f32 {
        std::f32::consts::PI * (self.r_max * self.r_max - self.r_min * self.r_min) * self.height
    }
}

/// How the torus tube cross-section is sampled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TorusMode {
    /// Disk-uniform tube offset, 3 draws. Ignores the `(R + r cos φ)` Jacobian, so
    /// the inner half of the tube is oversampled (density ∝ `1/(R + r cos φ)`).
    #[default]
    Approximate,
    /// Rejection on the Jacobian, 4 draws per attempt. Exactly uniform by volume.
    Exact,
}

/// Solid torus centred at `origin`, ring in the XZ plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TorusParams {
    origin: Vector3<f32>,
    major_radius: f32,
    minor_radius: f32,
    mode: TorusMode,
}

impl TorusParams {
    pub fn new(
        origin: Vector3<f32>,
        major_radius: f32,
        minor_radius: f32,
    ) -> Result<Self, SampleError> {
        validate_origin3(&origin)?;
        validate_torus(major_radius, minor_radius)?;
        Ok(Self {
            origin,
            major_radius,
            minor_radius,
            mode: TorusMode::default(),
        })
    }
    /// Same torus, different tube sampling mode.
    pub fn with_mode(mut self, mode: TorusMode) -> Self {
        self.mode = mode;
        self
    }
    #[inline]
    pub fn origin(&self) -> Vector3<f32> {
        self.origin
    }
    #[inline]
    pub fn major_radius(&self) -> f32 {
        self.major_radius
    }
    #[inline]
    pub fn minor_radius(&self) -> f32 {
        self.minor_radius
    }
    #[inline]
    pub fn mode(&self) -> TorusMode {
        self.mode
    }
    /// Pappus: `2π² R a²`.
    pub fn volume(&self) -> f32 {
        2.0 * std::f32::consts::PI
            * std::f32::consts::PI
            * self.major_radius
            * self.minor_radius
            * self.minor_radius
    }
}
