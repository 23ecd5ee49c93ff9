use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: shape, seed, and the shape parameters.
pub struct Payload {
    pub shape: &'static str,
    pub seed: u64,
    pub params: Value,
}

impl Payload {
    pub fn new(shape: &'static str, seed: u64, params: Value) -> Self {
        Self {
            shape,
            seed,
            params,
        }
    }

    fn to_doc(&self, callsite: &Location<'_>, outputs: Vec<String>) -> Value {
        json!({
            "code_rev": current_git_rev(),
            "volsample_version": volsample::VERSION,
            "callsite": {
                "file": callsite.file(),
                "line": callsite.line()
            },
            "shape": self.shape,
            "seed": self.seed,
            "params": self.params,
            "outputs": outputs
        })
    }
}

/// Write `<artifact-stem>.provenance.json` next to `artifact`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let doc = payload.to_doc(
        Location::caller(),
        vec![artifact.to_string_lossy().into_owned()],
    );
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    tracing::debug!(path = %provenance_path.display(), "provenance_written");
    Ok(provenance_path)
}

/// Provenance block with no outputs, for `report`.
#[track_caller]
pub fn report_block(seed: u64) -> Value {
    Payload::new("none", seed, json!({})).to_doc(Location::caller(), Vec::new())
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
