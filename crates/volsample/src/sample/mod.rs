//! Uniform random points in bounded shapes.
//!
//! Purpose
//! - Draw points uniformly by area (annulus) or volume (annular cylinder, torus)
//!   from an injected uniform source, with a fixed number of draws per sample.
//!
//! Why inverse CDF
//! - Uniform radius over-samples the inner edge because the area element is
//!   `r dr dθ`. Sampling `r²` uniformly (i.e. `r = sqrt(u (b² − a²) + a²)`) fixes
//!   that without rejection loops.
//!
//! Draw budget
//! - annulus: 2 (angle, radius)
//! - annular cylinder: 3 (angle, radius, height)
//! - torus: 3 (major angle, tube angle, tube radius); `TorusMode::Exact` adds a
//!   rejection draw per attempt.
//!
//! Errors
//! - Parameters are validated before the first draw; invalid geometry returns
//!   `SampleError::InvalidParameter` and leaves the RNG untouched.

mod annulus;
mod cylinder;
pub mod draw;
mod replay;
mod torus;
mod types;

pub use annulus::{sample_annulus, sample_circle_edge, sample_disk};
pub use cylinder::sample_annular_cylinder;
pub use replay::ReplayToken;
pub use torus::{sample_torus, sample_torus_with_mode};
pub use types::{AnnularCylinderParams, AnnulusParams, SampleError, TorusMode, TorusParams};

#[cfg(test)]
mod tests;
