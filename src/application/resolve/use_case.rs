//! Resolve Use Case
//!
//! Orchestrates one resolution run:
//! 1. Plan the module set from the resolved tree (sequential)
//! 2. Inspect each artifact and resolve its descriptor (parallel, bounded)
//! 3. Compose attribution texts
//! 4. Assemble the graph, or report the first failure in graph order
//!
//! Nothing is written here; the caller decides what to do with a
//! [`Resolution`]. A failed run yields no partial result.

use std::path::Path;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::domain::entities::{Artifact, Module, ModuleGraph, ResolvedTree};
use crate::domain::ports::{emit, ResolveEvent, ResolveEventSink};
use crate::domain::services::{
    ArchiveInspector, CopyrightComposer, DependencyGraphBuilder, DescriptorResolver,
    PlannedModule,
};
use crate::domain::value_objects::ModuleIdentity;
use crate::error::BpgenResult;

use super::options::ResolveOptions;
use super::result::{Attribution, Resolution};

pub struct ResolveUseCase {
    options: ResolveOptions,
    inspector: ArchiveInspector,
    resolver: DescriptorResolver,
}

impl ResolveUseCase {
    pub fn new(options: ResolveOptions) -> Self {
        Self {
            inspector: ArchiveInspector::new(options.target_sdk),
            resolver: DescriptorResolver::default(),
            options,
        }
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    pub fn execute(
        &self,
        tree: &ResolvedTree,
        sink: &dyn ResolveEventSink,
    ) -> BpgenResult<Resolution> {
        let planned = DependencyGraphBuilder::new()
            .with_quirks(self.options.quirks.clone())
            .plan(tree, sink);

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.options.jobs)
            .build()?;

        // Collecting into a Vec keeps graph order, so the first error below is
        // the first failing module rather than the first one to finish.
        let resolved: Vec<BpgenResult<(Module, Option<Attribution>)>> = pool.install(|| {
            planned
                .into_par_iter()
                .map(|module| self.resolve_module(module, sink))
                .collect()
        });
        let resolved = resolved.into_iter().collect::<BpgenResult<Vec<_>>>()?;

        let mut modules = Vec::with_capacity(resolved.len());
        let mut attributions = Vec::new();
        for (module, attribution) in resolved {
            modules.push(module);
            attributions.extend(attribution);
        }

        let resolution = Resolution {
            graph: ModuleGraph::new(self.options.min_sdk, modules),
            attributions,
        };

        emit(
            sink,
            ResolveEvent::Completed {
                module_count: resolution.graph.len(),
                attribution_count: resolution.writable_attributions().count(),
            },
        );

        Ok(resolution)
    }

    /// Inspect one artifact file, resolve its descriptor and compose its
    /// attribution text.
    pub fn classify(
        &self,
        file: &Path,
        extension: &str,
        identity: &ModuleIdentity,
        sink: &dyn ResolveEventSink,
    ) -> BpgenResult<(Artifact, String)> {
        let inspection = self.inspector.inspect(file, extension, sink)?;
        let descriptor = self.resolver.resolve(file, identity, sink)?;
        let text = CopyrightComposer::compose_for(&descriptor, sink);

        let artifact = Artifact::new(
            file,
            inspection.kind,
            identity.clone(),
            descriptor,
            inspection.target_sdk_version,
            inspection.min_sdk_version,
            inspection.contains_native_code,
        )?;

        emit(
            sink,
            ResolveEvent::ArtifactClassified {
                module: identity.coordinate(),
                kind: artifact.kind().to_string(),
                target_sdk: artifact.target_sdk_version(),
                native_code: artifact.contains_native_code(),
            },
        );

        Ok((artifact, text))
    }

    fn resolve_module(
        &self,
        planned: PlannedModule,
        sink: &dyn ResolveEventSink,
    ) -> BpgenResult<(Module, Option<Attribution>)> {
        let PlannedModule {
            identity,
            dependencies,
            artifact,
            promoted_first_level,
        } = planned;

        let Some(resolved) = artifact else {
            return Ok((
                Module::new(identity, dependencies, None, promoted_first_level),
                None,
            ));
        };

        let (artifact, text) =
            self.classify(resolved.file(), &resolved.extension(), &identity, sink)?;

        let attribution = Attribution {
            module: identity.clone(),
            artifact_file: artifact.file().to_path_buf(),
            sidecar_name: artifact.sidecar_name(),
            text,
        };

        Ok((
            Module::new(identity, dependencies, Some(artifact), promoted_first_level),
            Some(attribution),
        ))
    }
}
