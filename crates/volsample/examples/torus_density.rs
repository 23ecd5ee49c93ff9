//! Compare inner/outer tube occupancy for both torus modes.
//!
//! Usage:
//!   cargo run -p volsample --example torus_density -- [major] [minor]
//!
//! Prints the share of samples outside the ring centre line next to the exact
//! volume share `1/2 + 2a/(3πR)`.

use nalgebra::Vector3;
use rand::{rngs::StdRng, SeedableRng};
use volsample::sample::{sample_torus_with_mode, TorusMode};

fn main() {
    let mut args = std::env::args().skip(1);
    let major: f32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2.0);
    let minor: f32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(1.5);
    let n = 100_000;
    let exact_share = 0.5 + 2.0 * minor / (3.0 * std::f32::consts::PI * major);
    for mode in [TorusMode::Approximate, TorusMode::Exact] {
        let mut rng = StdRng::seed_from_u64(2025);
        let mut outer = 0usize;
        for _ in 0..n {
            let p = match sample_torus_with_mode(Vector3::zeros(), major, minor, mode, &mut rng) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("{e}");
                    return;
                }
            };
            if (p.x * p.x + p.z * p.z).sqrt() > major {
                outer += 1;
            }
        }
        println!(
            "{mode:?}: outer share {:.4} (volume share {:.4})",
            outer as f32 / n as f32,
            exact_share
        );
    }
}
