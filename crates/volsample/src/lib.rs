//! Uniform random points in annuli, annular cylinders and tori.
//!
//! Layout
//! - `sample`: the samplers (inverse-CDF transforms, fixed draw counts).
//! - `outline`: wireframe segments of the same shapes for visual checks.
//! - `vecops`: small component-wise helpers on `nalgebra` vectors.
//!
//! Conventions
//! - Numeric domain is `f32`. Points are `Vector2<f32>` / `Vector3<f32>`.
//! - 3D shapes are centred on their origin with the symmetry axis along +Y.
//! - Randomness is always injected (`&mut R where R: Rng + ?Sized`).

pub mod outline;
pub mod sample;
pub mod vecops;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::outline::{
        annular_cylinder_outline, annulus_outline, torus_outline, OutlineCfg, Segment2, Segment3,
    };
    pub use crate::sample::{
        sample_annular_cylinder, sample_annulus, sample_circle_edge, sample_disk, sample_torus,
        sample_torus_with_mode, AnnularCylinderParams, AnnulusParams, ReplayToken, SampleError,
        TorusMode, TorusParams,
    };
    pub use crate::vecops::VectorExt;
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}
