//! Resolved Tree Repository
//!
//! Reads the dependency tree exported by the host build tool.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::domain::entities::ResolvedTree;
use crate::error::{BpgenError, BpgenResult};

/// Path that stands for standard input
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTreeRepository;

impl JsonTreeRepository {
    pub fn new() -> Self {
        Self
    }

    /// Load a tree from a JSON file, or from stdin for `-`.
    pub fn load(&self, path: &Path) -> BpgenResult<ResolvedTree> {
        let content = if path == Path::new(STDIN_PATH) {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            content
        } else {
            fs::read_to_string(path)?
        };

        self.parse(&content).map_err(|e| match e {
            BpgenError::Json(source) => BpgenError::InvalidTree {
                message: format!("{}: {}", path.display(), source),
            },
            other => other,
        })
    }

    pub fn parse(&self, content: &str) -> BpgenResult<ResolvedTree> {
        ResolvedTree::from_json(content)
    }
}
