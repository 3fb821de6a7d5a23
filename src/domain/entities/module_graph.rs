//! ModuleGraph entity - the output handed to the build-file emitter

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use serde::Serialize;

use crate::domain::entities::Module;
use crate::domain::value_objects::ModuleIdentity;

/// Every resolved module keyed by identity (version ignored), plus the
/// run-wide platform minimum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleGraph {
    min_sdk_version: u32,
    #[serde(serialize_with = "serialize_modules")]
    modules: BTreeMap<ModuleIdentity, Module>,
}

fn serialize_modules<S>(
    modules: &BTreeMap<ModuleIdentity, Module>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(modules.values())
}

impl ModuleGraph {
    pub fn new(min_sdk_version: u32, modules: impl IntoIterator<Item = Module>) -> Self {
        Self {
            min_sdk_version,
            modules: modules
                .into_iter()
                .map(|module| (module.identity().clone(), module))
                .collect(),
        }
    }

    pub fn min_sdk_version(&self) -> u32 {
        self.min_sdk_version
    }

    pub fn get(&self, identity: &ModuleIdentity) -> Option<&Module> {
        self.modules.get(identity)
    }

    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.values()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Transitive dependencies of `identity`, excluding itself.
    ///
    /// Iterative walk over a visited set, so shared subgraphs are visited once
    /// and cycles terminate.
    pub fn transitive_dependencies(&self, identity: &ModuleIdentity) -> BTreeSet<ModuleIdentity> {
        let mut visited = BTreeSet::new();
        let mut queue: VecDeque<&ModuleIdentity> = VecDeque::new();

        if let Some(module) = self.modules.get(identity) {
            queue.extend(module.dependencies());
        }

        while let Some(current) = queue.pop_front() {
            if current == identity || !visited.insert(current.clone()) {
                continue;
            }
            if let Some(module) = self.modules.get(current) {
                queue.extend(module.dependencies());
            }
        }

        visited
    }
}
