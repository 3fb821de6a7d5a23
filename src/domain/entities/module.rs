//! Module entity - one node of the dependency graph

use std::collections::BTreeSet;
use std::ops::Deref;

use serde::Serialize;

use crate::domain::entities::Artifact;
use crate::domain::value_objects::ModuleIdentity;

/// A library module with its direct dependencies and classified artifact.
///
/// Built once per distinct identity while walking the resolved tree and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Module {
    #[serde(flatten)]
    identity: ModuleIdentity,
    dependencies: BTreeSet<ModuleIdentity>,
    artifact: Option<Artifact>,
    promoted_first_level: bool,
}

impl Module {
    pub fn new(
        identity: ModuleIdentity,
        dependencies: BTreeSet<ModuleIdentity>,
        artifact: Option<Artifact>,
        promoted_first_level: bool,
    ) -> Self {
        Self {
            identity,
            dependencies,
            artifact,
            promoted_first_level,
        }
    }

    pub fn identity(&self) -> &ModuleIdentity {
        &self.identity
    }

    /// Direct dependencies only.
    pub fn dependencies(&self) -> &BTreeSet<ModuleIdentity> {
        &self.dependencies
    }

    pub fn artifact(&self) -> Option<&Artifact> {
        self.artifact.as_ref()
    }

    /// A library archive reached only through code-archive consumers; the
    /// emitter must treat it as first-level so its resources are kept.
    pub fn promoted_first_level(&self) -> bool {
        self.promoted_first_level
    }
}

impl Deref for Module {
    type Target = ModuleIdentity;

    fn deref(&self) -> &ModuleIdentity {
        &self.identity
    }
}
