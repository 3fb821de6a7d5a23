//! Dependency graph builder
//!
//! Walks the resolved tree and plans one module per distinct identity:
//! its direct dependencies, the file to classify, and the first-level
//! promotion flag. Classification itself happens later, per module, once the
//! node set is known.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::domain::entities::{NodeId, ResolvedArtifact, ResolvedTree};
use crate::domain::ports::{emit, ResolveEvent, ResolveEventSink};
use crate::domain::value_objects::{ModuleIdentity, ModuleQuirk};

/// A module whose artifact has not been classified yet
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedModule {
    pub identity: ModuleIdentity,
    pub dependencies: BTreeSet<ModuleIdentity>,
    pub artifact: Option<ResolvedArtifact>,
    pub promoted_first_level: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DependencyGraphBuilder {
    quirks: BTreeMap<String, ModuleQuirk>,
}

impl DependencyGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quirks keyed by `group:name`.
    pub fn with_quirks(mut self, quirks: BTreeMap<String, ModuleQuirk>) -> Self {
        self.quirks = quirks;
        self
    }

    /// Plan every module reachable from the tree's roots, in discovery order.
    ///
    /// Every reachable node is walked, then nodes are grouped by identity.
    /// The first node reached for an identity supplies its version and
    /// artifact; dependencies and parents are the union over all of its nodes.
    pub fn plan(&self, tree: &ResolvedTree, sink: &dyn ResolveEventSink) -> Vec<PlannedModule> {
        let mut index: HashMap<ModuleIdentity, usize> = HashMap::new();
        let mut groups: Vec<Vec<NodeId>> = Vec::new();

        for id in Self::discover(tree) {
            match index.entry(tree.node(id).identity()) {
                Entry::Occupied(entry) => groups[*entry.get()].push(id),
                Entry::Vacant(entry) => {
                    entry.insert(groups.len());
                    groups.push(vec![id]);
                }
            }
        }

        let planned = groups
            .iter()
            .map(|nodes| Self::plan_module(tree, nodes, sink))
            .collect();

        self.apply_quirks(planned, sink)
    }

    /// Reachable nodes in depth-first preorder, each node once.
    fn discover(tree: &ResolvedTree) -> Vec<NodeId> {
        let mut visited = vec![false; tree.len()];
        let mut order = Vec::new();
        let mut stack: Vec<NodeId> = tree.roots().iter().rev().copied().collect();

        while let Some(id) = stack.pop() {
            if std::mem::replace(&mut visited[id], true) {
                continue;
            }
            order.push(id);
            stack.extend(tree.node(id).children().iter().rev());
        }

        order
    }

    /// `nodes` holds every node of one identity, first reached first.
    fn plan_module(
        tree: &ResolvedTree,
        nodes: &[NodeId],
        sink: &dyn ResolveEventSink,
    ) -> PlannedModule {
        let first = tree.node(nodes[0]);
        let identity = first.identity();

        let promoted_first_level = first.packages_library_archive()
            && nodes
                .iter()
                .flat_map(|&id| tree.parents(id))
                .all(|&parent| !tree.node(parent).packages_library_archive());

        let artifact = first.artifacts().first().cloned();
        if let Some(chosen) = &artifact {
            if first.artifacts().len() > 1 {
                emit(
                    sink,
                    ResolveEvent::MultipleArtifacts {
                        module: identity.coordinate(),
                        chosen: chosen.file().to_path_buf(),
                        count: first.artifacts().len(),
                    },
                );
            }
        }

        emit(
            sink,
            ResolveEvent::ModuleDiscovered {
                module: identity.coordinate(),
                promoted: promoted_first_level,
            },
        );

        let dependencies = nodes
            .iter()
            .flat_map(|&id| tree.node(id).children())
            .map(|&child| tree.node(child).identity())
            .filter(|dependency| *dependency != identity)
            .collect();

        PlannedModule {
            identity,
            dependencies,
            artifact,
            promoted_first_level,
        }
    }

    /// Drop quirked modules. `Ignore` also drops the edges pointing at them;
    /// `InheritDependencies` replaces those edges with the module's own
    /// dependencies, transitively through other inheriting modules.
    fn apply_quirks(
        &self,
        planned: Vec<PlannedModule>,
        sink: &dyn ResolveEventSink,
    ) -> Vec<PlannedModule> {
        if self.quirks.is_empty() {
            return planned;
        }

        let inherited: BTreeMap<ModuleIdentity, BTreeSet<ModuleIdentity>> = planned
            .iter()
            .filter(|m| self.quirk(&m.identity) == Some(ModuleQuirk::InheritDependencies))
            .map(|m| (m.identity.clone(), m.dependencies.clone()))
            .collect();

        planned
            .into_iter()
            .filter(|module| match self.quirk(&module.identity) {
                Some(quirk) => {
                    emit(
                        sink,
                        ResolveEvent::QuirkApplied {
                            module: module.identity.coordinate(),
                            quirk: quirk.as_str().to_string(),
                        },
                    );
                    false
                }
                None => true,
            })
            .map(|mut module| {
                module.dependencies = self.expand_dependencies(&module, &inherited);
                module
            })
            .collect()
    }

    fn expand_dependencies(
        &self,
        module: &PlannedModule,
        inherited: &BTreeMap<ModuleIdentity, BTreeSet<ModuleIdentity>>,
    ) -> BTreeSet<ModuleIdentity> {
        let mut result = BTreeSet::new();
        let mut seen = BTreeSet::new();
        let mut pending: Vec<ModuleIdentity> = module.dependencies.iter().cloned().collect();

        while let Some(dependency) = pending.pop() {
            if dependency == module.identity || !seen.insert(dependency.clone()) {
                continue;
            }
            match self.quirk(&dependency) {
                Some(ModuleQuirk::Ignore) => {}
                Some(ModuleQuirk::InheritDependencies) => {
                    if let Some(deps) = inherited.get(&dependency) {
                        pending.extend(deps.iter().cloned());
                    }
                }
                None => {
                    result.insert(dependency);
                }
            }
        }

        result
    }

    fn quirk(&self, identity: &ModuleIdentity) -> Option<ModuleQuirk> {
        self.quirks.get(&identity.key()).copied()
    }
}
