//! Sidecar JSON written next to every artifact the CLI produces, so a
//! results file can be traced back to its inputs and the build that made it.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Environment variable that pins the recorded revision, e.g. in CI.
const REV_VAR: &str = "GIT_COMMIT";

/// Command parameters plus the files they were read from.
pub struct Payload {
    pub params: Value,
    pub inputs: Vec<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
        }
    }

    pub fn with_input<P: AsRef<Path>>(mut self, input: P) -> Self {
        self.inputs.push(display_path(input.as_ref()));
        self
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    linref_version: &'static str,
    callsite: Callsite,
    params: &'a Value,
    inputs: &'a [String],
    outputs: [String; 1],
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// `results.json` → `results.provenance.json`; an extension-less artifact
/// gets the suffix appended.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Revision from `GIT_COMMIT` when set, else `git rev-parse`, else `unknown`.
pub fn code_rev() -> String {
    code_rev_from(std::env::var(REV_VAR).ok())
}

fn code_rev_from(pinned: Option<String>) -> String {
    if let Some(rev) = pinned.filter(|r| !r.trim().is_empty()) {
        return rev.trim().to_string();
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|rev| rev.trim().to_string())
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Write the sidecar for `artifact` and return its path. The recorded
/// callsite is the caller of this function.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let caller = Location::caller();
    let path = sidecar_path(artifact);
    let doc = Sidecar {
        code_rev: code_rev(),
        linref_version: linref::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        params: &payload.params,
        inputs: &payload.inputs,
        outputs: [display_path(artifact)],
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(sidecar = %path.display(), "provenance_written");
    Ok(path)
}
