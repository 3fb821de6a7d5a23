//! Resolve Result

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::ModuleGraph;
use crate::domain::value_objects::ModuleIdentity;

/// Attribution text for one artifact, to be written next to it as
/// `<artifact file name>.license`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribution {
    pub module: ModuleIdentity,
    pub artifact_file: PathBuf,
    pub sidecar_name: String,
    /// Possibly empty; empty texts are never written
    pub text: String,
}

impl Attribution {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// `<relativePath>/<sidecar>` under an output directory
    pub fn destination(&self, out_dir: &Path) -> PathBuf {
        out_dir
            .join(self.module.relative_path())
            .join(&self.sidecar_name)
    }
}

/// Everything one successful run produces
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub graph: ModuleGraph,
    /// One per classified artifact, in graph order
    pub attributions: Vec<Attribution>,
}

impl Resolution {
    /// Attributions that would actually produce a file
    pub fn writable_attributions(&self) -> impl Iterator<Item = &Attribution> {
        self.attributions.iter().filter(|a| !a.is_empty())
    }
}
