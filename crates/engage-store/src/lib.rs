//! Persistence for the single state document plus the read-only segment
//! registry built on top of it.

pub mod registry;
pub mod sample;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use engage_core::error::{EngageError, EngageResult};
use engage_core::types::StateDocument;

pub use registry::SegmentRegistry;

/// Owns the location of the persisted state document and the
/// load / atomic-save / reset lifecycle over it.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the state document. A missing file seeds the bundled sample;
    /// an unparseable file surfaces `CorruptState` and is left untouched
    /// (reset only happens on explicit operator request).
    pub fn load(&self) -> EngageResult<StateDocument> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "No state file found, seeding sample data");
            return self.reset_to_sample();
        }
        let raw = fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw).map_err(|e| EngageError::CorruptState {
            path: self.path.display().to_string(),
            detail: e.to_string(),
        })
    }

    /// Persists the document atomically: serialize to a sibling temp file,
    /// then rename over the previous document, so a crash mid-write never
    /// leaves a truncated state file.
    pub fn save(&self, doc: &StateDocument) -> EngageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.tmp_path();
        fs::write(&tmp, render_document(doc)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Overwrites current state with the bundled sample document.
    /// Irreversible; callers must confirm intent before invoking.
    pub fn reset_to_sample(&self) -> EngageResult<StateDocument> {
        let doc = sample::sample_document(chrono::Local::now().date_naive());
        self.save(&doc)?;
        info!(path = %self.path.display(), "State reset to sample data");
        Ok(doc)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Canonical on-disk rendering. Pretty-printed with struct field order so
/// that `save(load())` is byte-identical when nothing was mutated.
fn render_document(doc: &StateDocument) -> EngageResult<String> {
    let mut out = serde_json::to_string_pretty(doc)?;
    out.push('\n');
    Ok(out)
}
