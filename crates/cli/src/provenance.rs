//! Sidecar records written next to `solve --out` artifacts.
//!
//! The sidecar says which build produced the artifact and summarises the run
//! (input source, puzzle rows, outcome, chosen subgraphs) so a directory of
//! results can be scanned without reparsing each full solution file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::view::SolveView;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SolveRecord {
    pub code_rev: String,
    pub version: String,
    /// `preset:<name>`, `inline`, or `file:<path>`.
    pub source: String,
    pub puzzle: Vec<String>,
    /// `solved`, `decomposition`, or `orientation`.
    pub status: String,
    pub g1: Vec<usize>,
    pub g2: Vec<usize>,
    /// Catalog index per cube; empty unless solved.
    pub rotations: Vec<Option<usize>>,
    pub artifact: String,
}

impl SolveRecord {
    pub fn new(source: &str, view: &SolveView, artifact: &Path) -> Self {
        Self {
            code_rev: current_git_rev(),
            version: insanity::VERSION.to_string(),
            source: source.to_string(),
            puzzle: view.puzzle.clone(),
            status: view.status.to_string(),
            g1: view.g1.clone(),
            g2: view.g2.clone(),
            rotations: view.cubes.iter().map(|c| c.rotation).collect(),
            artifact: artifact.display().to_string(),
        }
    }
}

/// `results/standard.json` -> `results/standard.provenance.json`.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Write the record beside `artifact` and return the sidecar path.
pub fn write_sidecar(artifact: &Path, record: &SolveRecord) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(record)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Commit of the running build: `GIT_COMMIT` at compile time, then at run
/// time, then `git rev-parse`, else `unknown`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|rev| rev.trim().to_string())
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
