//! ResolvedTree entity - the dependency tree handed over by the host build tool
//!
//! Version selection and conflict arbitration already happened upstream; this
//! is just the shape of the result. Nodes live in an arena and refer to each
//! other by index. Parent sets are derived from the child edges.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::value_objects::{ArtifactKind, ModuleIdentity};
use crate::error::{BpgenError, BpgenResult};

/// Index of a node inside a [`ResolvedTree`].
pub type NodeId = usize;

/// One file a resolved node packages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResolvedArtifact {
    file: PathBuf,
    #[serde(default)]
    extension: Option<String>,
}

impl ResolvedArtifact {
    pub fn new(file: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            extension: Some(extension.into()),
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Declared extension, falling back to the file's own extension.
    pub fn extension(&self) -> String {
        self.extension.clone().unwrap_or_else(|| {
            self.file
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResolvedNode {
    group: String,
    name: String,
    version: String,
    #[serde(default)]
    children: Vec<NodeId>,
    #[serde(default)]
    artifacts: Vec<ResolvedArtifact>,
}

impl ResolvedNode {
    pub fn new(identity: &ModuleIdentity) -> Self {
        Self {
            group: identity.group().to_string(),
            name: identity.name().to_string(),
            version: identity.version().to_string(),
            children: Vec::new(),
            artifacts: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<NodeId>) -> Self {
        self.children = children;
        self
    }

    pub fn with_artifact(mut self, artifact: ResolvedArtifact) -> Self {
        self.artifacts.push(artifact);
        self
    }

    pub fn identity(&self) -> ModuleIdentity {
        ModuleIdentity::new(&self.group, &self.name, &self.version)
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn artifacts(&self) -> &[ResolvedArtifact] {
        &self.artifacts
    }

    /// Whether any packaged file is a library archive (`.aar`).
    pub fn packages_library_archive(&self) -> bool {
        self.artifacts
            .iter()
            .any(|a| ArtifactKind::from_extension(&a.extension()) == Some(ArtifactKind::LibraryArchive))
    }
}

#[derive(Debug, Deserialize)]
struct RawTree {
    #[serde(default)]
    roots: Option<Vec<NodeId>>,
    nodes: Vec<ResolvedNode>,
}

/// Arena of resolved nodes with derived parent sets.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawTree")]
pub struct ResolvedTree {
    nodes: Vec<ResolvedNode>,
    parents: Vec<Vec<NodeId>>,
    roots: Vec<NodeId>,
}

impl TryFrom<RawTree> for ResolvedTree {
    type Error = BpgenError;

    fn try_from(raw: RawTree) -> BpgenResult<Self> {
        ResolvedTree::new(raw.nodes, raw.roots)
    }
}

impl ResolvedTree {
    /// Build the arena. `roots` defaults to every node without a parent.
    pub fn new(nodes: Vec<ResolvedNode>, roots: Option<Vec<NodeId>>) -> BpgenResult<Self> {
        let mut parents: Vec<Vec<NodeId>> = vec![Vec::new(); nodes.len()];

        for (index, node) in nodes.iter().enumerate() {
            for &child in &node.children {
                if child >= nodes.len() {
                    return Err(BpgenError::InvalidTree {
                        message: format!(
                            "node {} ({}) refers to missing child {}",
                            index,
                            node.identity(),
                            child
                        ),
                    });
                }
                if !parents[child].contains(&index) {
                    parents[child].push(index);
                }
            }
        }

        let roots = match roots {
            Some(roots) => {
                if let Some(missing) = roots.iter().find(|&&root| root >= nodes.len()) {
                    return Err(BpgenError::InvalidTree {
                        message: format!("root {} does not exist", missing),
                    });
                }
                roots
            }
            None => (0..nodes.len()).filter(|&i| parents[i].is_empty()).collect(),
        };

        Ok(Self {
            nodes,
            parents,
            roots,
        })
    }

    pub fn from_json(content: &str) -> BpgenResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> &ResolvedNode {
        &self.nodes[id]
    }

    pub fn parents(&self, id: NodeId) -> &[NodeId] {
        &self.parents[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parents_are_derived_from_children() {
        let json = r#"{
            "nodes": [
                { "group": "g", "name": "app-lib", "version": "1", "children": [2] },
                { "group": "g", "name": "other", "version": "1", "children": [2] },
                { "group": "g", "name": "shared", "version": "1",
                  "artifacts": [ { "file": "/cache/shared-1.aar" } ] }
            ]
        }"#;
        let tree = ResolvedTree::from_json(json).unwrap();

        assert_eq!(tree.roots(), &[0, 1]);
        assert_eq!(tree.parents(2), &[0, 1]);
        assert!(tree.parents(0).is_empty());
        assert_eq!(tree.node(2).artifacts()[0].extension(), "aar");
        assert!(tree.node(2).packages_library_archive());
    }

    #[test]
    fn dangling_child_is_rejected() {
        let json = r#"{ "nodes": [ { "group": "g", "name": "a", "version": "1", "children": [3] } ] }"#;
        let err = ResolvedTree::from_json(json).unwrap_err();
        assert!(err.to_string().contains("missing child 3"), "{err}");
    }

    #[test]
    fn explicit_roots_are_validated() {
        let nodes = vec![ResolvedNode::new(&ModuleIdentity::new("g", "a", "1"))];
        assert!(ResolvedTree::new(nodes.clone(), Some(vec![0])).is_ok());
        assert!(matches!(
            ResolvedTree::new(nodes, Some(vec![1])),
            Err(BpgenError::InvalidTree { .. })
        ));
    }
}
