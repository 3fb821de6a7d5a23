//! Attribution Writer
//!
//! Writes `.license` sidecars under an output directory, one per artifact
//! with a non-empty attribution text.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::application::resolve::Attribution;
use crate::domain::ports::{emit, ResolveEvent, ResolveEventSink};
use crate::error::BpgenResult;

#[derive(Debug, Clone)]
pub struct AttributionWriter {
    out_dir: PathBuf,
}

impl AttributionWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Write every non-empty attribution; returns the written paths in order.
    pub fn write_all<'a>(
        &self,
        attributions: impl IntoIterator<Item = &'a Attribution>,
        sink: &dyn ResolveEventSink,
    ) -> BpgenResult<Vec<PathBuf>> {
        let mut written = Vec::new();

        for attribution in attributions {
            if attribution.is_empty() {
                continue;
            }

            let path = attribution.destination(&self.out_dir);
            write_atomic(&path, attribution.text.as_bytes())?;
            emit(sink, ResolveEvent::AttributionWritten { path: path.clone() });
            written.push(path);
        }

        Ok(written)
    }
}

/// Write through a temp file in the destination directory, then rename.
pub fn write_atomic(path: &Path, content: &[u8]) -> BpgenResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(content)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
