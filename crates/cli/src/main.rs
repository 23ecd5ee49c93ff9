use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use nalgebra::{Vector2, Vector3};
use rand::distributions::Distribution;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use volsample::outline::{annular_cylinder_outline, annulus_outline, torus_outline, OutlineCfg};
use volsample::sample::{
    AnnularCylinderParams, AnnulusParams, ReplayToken, TorusMode, TorusParams,
};

mod check;
mod provenance;
mod table;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "volsample")]
#[command(about = "Uniform random points in annuli, hollow cylinders and tori")]
struct Cmd {
    /// Seed for the replay tokens; row `i` is drawn from `(seed, i)`
    #[arg(long, global = true, default_value_t = 0)]
    seed: u64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Sample points in a 2D annulus
    Annulus {
        #[arg(long)]
        r_min: f32,
        #[arg(long)]
        r_max: f32,
        /// Centre as `x,y`
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        origin: Vec<f32>,
        #[arg(long, default_value_t = 1000)]
        count: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Sample points in a hollow cylinder (axis +Y)
    Cylinder {
        #[arg(long)]
        r_min: f32,
        #[arg(long)]
        r_max: f32,
        #[arg(long)]
        height: f32,
        /// Centre as `x,y,z`
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        origin: Vec<f32>,
        #[arg(long, default_value_t = 1000)]
        count: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Sample points in a solid torus (ring in XZ)
    Torus {
        #[arg(long)]
        major: f32,
        #[arg(long)]
        minor: f32,
        /// Use Jacobian rejection for exact volumetric uniformity
        #[arg(long)]
        exact: bool,
        /// Centre as `x,y,z`
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        origin: Vec<f32>,
        #[arg(long, default_value_t = 1000)]
        count: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write wireframe segments of a shape as JSON
    Outline {
        #[arg(long, value_enum)]
        shape: Shape,
        #[arg(long, default_value_t = 0.0)]
        r_min: f32,
        #[arg(long, default_value_t = 1.0)]
        r_max: f32,
        #[arg(long, default_value_t = 1.0)]
        height: f32,
        #[arg(long, default_value_t = 2.0)]
        major: f32,
        #[arg(long, default_value_t = 0.5)]
        minor: f32,
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        origin: Vec<f32>,
        #[arg(long, default_value_t = 32)]
        segments: usize,
        #[arg(long, default_value_t = 12)]
        minor_segments: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Radial statistics of a sample table (CSV or Parquet)
    Check {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        origin: Vec<f32>,
        /// Inner bound for equal-area ring counts (needs --r-max)
        #[arg(long, requires = "r_max")]
        r_min: Option<f64>,
        /// Outer bound for equal-area ring counts (needs --r-min)
        #[arg(long, requires = "r_min")]
        r_max: Option<f64>,
        #[arg(long, default_value_t = 8)]
        rings: usize,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    Annulus,
    Cylinder,
    Torus,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let seed = cmd.seed;
    match cmd.action {
        Action::Annulus {
            r_min,
            r_max,
            origin,
            count,
            out,
        } => run_annulus(seed, r_min, r_max, &origin, count, &out),
        Action::Cylinder {
            r_min,
            r_max,
            height,
            origin,
            count,
            out,
        } => run_cylinder(seed, r_min, r_max, height, &origin, count, &out),
        Action::Torus {
            major,
            minor,
            exact,
            origin,
            count,
            out,
        } => run_torus(seed, major, minor, exact, &origin, count, &out),
        Action::Outline {
            shape,
            r_min,
            r_max,
            height,
            major,
            minor,
            origin,
            segments,
            minor_segments,
            out,
        } => {
            let cfg = OutlineCfg {
                segments,
                minor_segments,
            };
            let dims = Dims {
                r_min,
                r_max,
                height,
                major,
                minor,
            };
            run_outline(shape, dims, &origin, cfg, &out)
        }
        Action::Check {
            input,
            origin,
            r_min,
            r_max,
            rings,
        } => run_check(&input, &origin, ring_bounds(r_min, r_max)?, rings),
        Action::Report => report(seed),
    }
}

fn origin2(v: &[f32]) -> Result<Vector2<f32>> {
    match v {
        [] => Ok(Vector2::zeros()),
        [x, y] => Ok(Vector2::new(*x, *y)),
        _ => bail!("--origin expects 2 components, got {}", v.len()),
    }
}

fn origin3(v: &[f32]) -> Result<Vector3<f32>> {
    match v {
        [] => Ok(Vector3::zeros()),
        [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
        _ => bail!("--origin expects 3 components, got {}", v.len()),
    }
}

/// Row `i` drawn from its own replay token.
fn draw_rows<T, D: Distribution<T>>(dist: &D, seed: u64, count: u64) -> Vec<(u64, T)> {
    (0..count)
        .map(|i| {
            let mut rng = ReplayToken::new(seed, i).rng();
            (i, dist.sample(&mut rng))
        })
        .collect()
}

fn run_annulus(
    seed: u64,
    r_min: f32,
    r_max: f32,
    origin: &[f32],
    count: u64,
    out: &Path,
) -> Result<()> {
    let o = origin2(origin)?;
    let params = AnnulusParams::new(o, r_min, r_max)?;
    tracing::info!(seed, r_min, r_max, count, out = %out.display(), "annulus");
    let rows: Vec<(u64, [f32; 2])> = draw_rows(&params, seed, count)
        .into_iter()
        .map(|(i, p): (u64, Vector2<f32>)| (i, [p.x, p.y]))
        .collect();
    table::write_planar(out, &rows)?;
    let payload = Payload::new(
        "annulus",
        seed,
        json!({ "origin": [o.x, o.y], "r_min": r_min, "r_max": r_max, "count": count }),
    );
    write_sidecar(out, payload)?;
    Ok(())
}

fn run_cylinder(
    seed: u64,
    r_min: f32,
    r_max: f32,
    height: f32,
    origin: &[f32],
    count: u64,
    out: &Path,
) -> Result<()> {
    let o = origin3(origin)?;
    let params = AnnularCylinderParams::new(o, r_min, r_max, height)?;
    tracing::info!(seed, r_min, r_max, height, count, out = %out.display(), "cylinder");
    let rows = spatial_rows(draw_rows(&params, seed, count));
    table::write_spatial(out, &rows)?;
    let payload = Payload::new(
        "annular_cylinder",
        seed,
        json!({
            "origin": [o.x, o.y, o.z],
            "r_min": r_min,
            "r_max": r_max,
            "height": height,
            "count": count
        }),
    );
    write_sidecar(out, payload)?;
    Ok(())
}

fn run_torus(
    seed: u64,
    major: f32,
    minor: f32,
    exact: bool,
    origin: &[f32],
    count: u64,
    out: &Path,
) -> Result<()> {
    let o = origin3(origin)?;
    let mode = if exact {
        TorusMode::Exact
    } else {
        TorusMode::Approximate
    };
    let params = TorusParams::new(o, major, minor)?.with_mode(mode);
    tracing::info!(seed, major, minor, mode = ?mode, count, out = %out.display(), "torus");
    let rows = spatial_rows(draw_rows(&params, seed, count));
    table::write_spatial(out, &rows)?;
    let payload = Payload::new(
        "torus",
        seed,
        json!({
            "origin": [o.x, o.y, o.z],
            "major": major,
            "minor": minor,
            "mode": format!("{mode:?}"),
            "count": count
        }),
    );
    write_sidecar(out, payload)?;
    Ok(())
}

fn spatial_rows(rows: Vec<(u64, Vector3<f32>)>) -> Vec<(u64, [f32; 3])> {
    rows.into_iter().map(|(i, p)| (i, [p.x, p.y, p.z])).collect()
}

struct Dims {
    r_min: f32,
    r_max: f32,
    height: f32,
    major: f32,
    minor: f32,
}

#[derive(Serialize)]
struct OutlineDoc {
    shape: &'static str,
    segments: Vec<[Vec<f32>; 2]>,
}

fn run_outline(shape: Shape, d: Dims, origin: &[f32], cfg: OutlineCfg, out: &Path) -> Result<()> {
    tracing::info!(shape = ?shape, segments = cfg.segments, out = %out.display(), "outline");
    let (name, segments): (&'static str, Vec<[Vec<f32>; 2]>) = match shape {
        Shape::Annulus => {
            let segs = annulus_outline(origin2(origin)?, d.r_min, d.r_max, cfg)?;
            let segs = segs
                .into_iter()
                .map(|s| [vec![s.a.x, s.a.y], vec![s.b.x, s.b.y]])
                .collect();
            ("annulus", segs)
        }
        Shape::Cylinder => {
            let segs = annular_cylinder_outline(origin3(origin)?, d.r_min, d.r_max, d.height, cfg)?;
            ("annular_cylinder", segs.into_iter().map(seg3).collect())
        }
        Shape::Torus => {
            let segs = torus_outline(origin3(origin)?, d.major, d.minor, cfg)?;
            ("torus", segs.into_iter().map(seg3).collect())
        }
    };
    let doc = OutlineDoc {
        shape: name,
        segments,
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let payload = Payload::new(
        name,
        0,
        json!({
            "r_min": d.r_min,
            "r_max": d.r_max,
            "height": d.height,
            "major": d.major,
            "minor": d.minor,
            "segments": cfg.segments,
            "minor_segments": cfg.minor_segments
        }),
    );
    write_sidecar(out, payload)?;
    Ok(())
}

fn seg3(s: volsample::outline::Segment3) -> [Vec<f32>; 2] {
    [vec![s.a.x, s.a.y, s.a.z], vec![s.b.x, s.b.y, s.b.z]]
}

/// Ring bounds come as a pair; one without the other is an error.
fn ring_bounds(r_min: Option<f64>, r_max: Option<f64>) -> Result<Option<(f64, f64)>> {
    match (r_min, r_max) {
        (Some(lo), Some(hi)) => Ok(Some((lo, hi))),
        (None, None) => Ok(None),
        _ => bail!("--r-min and --r-max must be given together"),
    }
}

fn run_check(input: &Path, origin: &[f32], bounds: Option<(f64, f64)>, rings: usize) -> Result<()> {
    tracing::info!(input = %input.display(), rings, "check");
    let points = table::read_points(input)?;
    if points.is_empty() {
        bail!("{} has no rows", input.display());
    }
    tracing::debug!(rows = points.len(), "table_read");
    let o: [f64; 3] = match origin {
        [] => [0.0; 3],
        [x, y] => [*x as f64, *y as f64, 0.0],
        [x, y, z] => [*x as f64, *y as f64, *z as f64],
        _ => bail!("--origin expects 2 or 3 components, got {}", origin.len()),
    };
    let report = check::radial_report(&points, o, bounds, rings);
    tracing::info!(
        count = report.count,
        min = report.min,
        max = report.max,
        "radial_stats"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn report(seed: u64) -> Result<()> {
    let obj = provenance::report_block(seed);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
