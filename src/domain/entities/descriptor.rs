//! Descriptor entity - the resolved metadata of one module's `.pom`
//!
//! Inherited fields (inception year, organization, licenses, developers) are
//! already filled in from the parent chain; `dependencies` only ever come from
//! the module's own descriptor.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::{dedup_licenses, License, ModuleIdentity};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Descriptor {
    file: PathBuf,
    identity: ModuleIdentity,
    inception_year: Option<i32>,
    organization_name: Option<String>,
    licenses: Vec<License>,
    developer_names: Vec<String>,
    dependencies: Vec<ModuleIdentity>,
}

impl Descriptor {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        file: impl Into<PathBuf>,
        identity: ModuleIdentity,
        inception_year: Option<i32>,
        organization_name: Option<String>,
        licenses: Vec<License>,
        developer_names: Vec<String>,
        dependencies: Vec<ModuleIdentity>,
    ) -> Self {
        Self {
            file: file.into(),
            identity,
            inception_year,
            organization_name,
            licenses,
            developer_names,
            dependencies,
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn identity(&self) -> &ModuleIdentity {
        &self.identity
    }

    pub fn inception_year(&self) -> Option<i32> {
        self.inception_year
    }

    pub fn organization_name(&self) -> Option<&str> {
        self.organization_name.as_deref()
    }

    /// Declared licenses in declaration order, duplicates included.
    pub fn licenses(&self) -> &[License] {
        &self.licenses
    }

    /// Declared licenses, deduplicated, declaration order kept.
    pub fn unique_licenses(&self) -> Vec<License> {
        dedup_licenses(&self.licenses)
    }

    pub fn developer_names(&self) -> &[String] {
        &self.developer_names
    }

    pub fn dependencies(&self) -> &[ModuleIdentity] {
        &self.dependencies
    }

    /// The organization when it has a name, otherwise every developer.
    pub fn copyright_holders(&self) -> Vec<String> {
        match &self.organization_name {
            Some(name) => vec![name.clone()],
            None => self.developer_names.clone(),
        }
    }
}
