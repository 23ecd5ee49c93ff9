//! Sample tables on disk (polars).
//!
//! Columns: `index` (replay index), `x`, `y`, and `z` for 3D shapes. The format
//! follows the file extension: `.parquet` → Parquet, anything else → CSV.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Points read back from a sample table, widened to `f64`.
#[derive(Debug, Clone, PartialEq)]
pub enum Points {
    Planar(Vec<[f64; 2]>),
    Spatial(Vec<[f64; 3]>),
}

impl Points {
    pub fn len(&self) -> usize {
        match self {
            Points::Planar(p) => p.len(),
            Points::Spatial(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn is_parquet(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("parquet")
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

fn write_frame(df: &mut DataFrame, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if is_parquet(path) {
        ParquetWriter::new(&mut file).finish(df)?;
    } else {
        CsvWriter::new(&mut file).include_header(true).finish(df)?;
    }
    tracing::debug!(path = %path.display(), rows = df.height(), "table_written");
    Ok(())
}

pub fn write_planar(path: &Path, rows: &[(u64, [f32; 2])]) -> Result<()> {
    let index: Vec<u64> = rows.iter().map(|r| r.0).collect();
    let x: Vec<f32> = rows.iter().map(|r| r.1[0]).collect();
    let y: Vec<f32> = rows.iter().map(|r| r.1[1]).collect();
    let mut df = df!("index" => index, "x" => x, "y" => y)?;
    write_frame(&mut df, path)
}

pub fn write_spatial(path: &Path, rows: &[(u64, [f32; 3])]) -> Result<()> {
    let index: Vec<u64> = rows.iter().map(|r| r.0).collect();
    let x: Vec<f32> = rows.iter().map(|r| r.1[0]).collect();
    let y: Vec<f32> = rows.iter().map(|r| r.1[1]).collect();
    let z: Vec<f32> = rows.iter().map(|r| r.1[2]).collect();
    let mut df = df!("index" => index, "x" => x, "y" => y, "z" => z)?;
    write_frame(&mut df, path)
}

fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let s = df
        .column(name)
        .with_context(|| format!("missing column {name}"))?
        .cast(&DataType::Float64)?;
    let ca = s.f64()?;
    if ca.null_count() > 0 {
        bail!("column {name} contains nulls");
    }
    Ok(ca.into_no_null_iter().collect())
}

/// Read a table written by `write_planar`/`write_spatial`.
pub fn read_points(path: &Path) -> Result<Points> {
    let lf = if is_parquet(path) {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default())?
    } else {
        LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?
    };
    let df = lf
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let x = column_f64(&df, "x")?;
    let y = column_f64(&df, "y")?;
    if df.column("z").is_ok() {
        let z = column_f64(&df, "z")?;
        Ok(Points::Spatial(
            x.into_iter()
                .zip(y)
                .zip(z)
                .map(|((x, y), z)| [x, y, z])
                .collect(),
        ))
    } else {
        Ok(Points::Planar(
            x.into_iter().zip(y).map(|(x, y)| [x, y]).collect(),
        ))
    }
}
