//! POM document
//!
//! Owned snapshot of the parts of a `.pom` that bpgen reads. Each section is
//! an `Option` so "absent" (ask the parent) can be told apart from "present
//! but empty" (stop here).

use std::path::{Path, PathBuf};

use roxmltree::Node;

use crate::domain::value_objects::ModuleIdentity;
use crate::error::{BpgenError, BpgenResult};

/// `groupId`/`artifactId`/`version` as written, each possibly missing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coordinates {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
}

impl Coordinates {
    fn from_node(node: Node<'_, '_>) -> Self {
        Self {
            group_id: child_text(node, "groupId"),
            artifact_id: child_text(node, "artifactId"),
            version: child_text(node, "version"),
        }
    }

    /// All three coordinates, or the name of the first missing one.
    pub fn complete(&self) -> Result<ModuleIdentity, &'static str> {
        let group = self.group_id.as_deref().ok_or("Group ID")?;
        let artifact = self.artifact_id.as_deref().ok_or("Artifact ID")?;
        let version = self.version.as_deref().ok_or("Version")?;
        Ok(ModuleIdentity::new(group, artifact, version))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PomDocument {
    pub inception_year: Option<String>,
    /// `Some(None)`: `<organization>` without a `<name>`
    pub organization: Option<Option<String>>,
    /// One entry per `<license>`, holding its `<url>` if any
    pub licenses: Option<Vec<Option<String>>>,
    pub developers: Option<Vec<String>>,
    pub parent: Option<Coordinates>,
    pub dependencies: Option<Vec<Coordinates>>,
}

impl PomDocument {
    pub fn parse(content: &str) -> Result<Self, roxmltree::Error> {
        let document = roxmltree::Document::parse(content)?;
        let project = document.root_element();

        Ok(Self {
            inception_year: child_element(project, "inceptionYear")
                .and_then(|node| node.text())
                .map(|text| text.trim().to_string()),
            organization: child_element(project, "organization")
                .map(|node| child_text(node, "name")),
            licenses: child_element(project, "licenses").map(|node| {
                child_elements(node, "license")
                    .map(|license| child_text(license, "url"))
                    .collect()
            }),
            developers: child_element(project, "developers").map(|node| {
                child_elements(node, "developer")
                    .filter_map(|developer| child_text(developer, "name"))
                    .collect()
            }),
            parent: child_element(project, "parent").map(Coordinates::from_node),
            dependencies: child_element(project, "dependencies").map(|node| {
                child_elements(node, "dependency")
                    .map(Coordinates::from_node)
                    .collect()
            }),
        })
    }

    pub fn load(file: &Path) -> BpgenResult<Self> {
        let bytes = std::fs::read(file).map_err(|e| BpgenError::read_file(file, e))?;
        let content = String::from_utf8_lossy(&bytes);
        Self::parse(&content).map_err(|e| BpgenError::InvalidDescriptor {
            file: PathBuf::from(file),
            message: e.to_string(),
        })
    }
}

fn child_elements<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |child| child.is_element() && child.tag_name().name() == name)
}

fn child_element<'a, 'input: 'a>(node: Node<'a, 'input>, name: &'static str) -> Option<Node<'a, 'input>> {
    child_elements(node, name).next()
}

/// Trimmed text of a child element; empty text counts as missing.
fn child_text(node: Node<'_, '_>, name: &'static str) -> Option<String> {
    child_element(node, name)
        .and_then(|child| child.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
