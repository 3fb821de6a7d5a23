//! Descriptor resolver
//!
//! Builds a [`Descriptor`] for an artifact from the `.pom` next to it in a
//! Gradle `files-2.1` cache:
//!
//! ```text
//! <cache>/<group>/<name>/<version>/<sha1>/<name>-<version>.pom
//! <cache>/<group>/<name>/<version>/<sha1>/<name>-<version>.aar
//! ```
//!
//! Inception year, organization, licenses and developers fall back to the
//! `<parent>` chain when absent. Every step of the chain reads the parent's
//! own descriptor from disk; nothing is cached between lookups.
//! Dependencies are never inherited.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::pom_document::PomDocument;
use crate::domain::entities::Descriptor;
use crate::domain::ports::{emit, ResolveEvent, ResolveEventSink};
use crate::domain::value_objects::{License, LicenseCatalog, ModuleIdentity};
use crate::error::{BpgenError, BpgenResult};

/// Levels between a descriptor file and the cache root
/// (`<sha1>`, `<version>`, `<name>`, `<group>`, root).
const CACHE_ROOT_DEPTH: usize = 5;

const DESCRIPTOR_EXTENSION: &str = "pom";

/// A parsed descriptor together with where it came from.
struct LoadedPom {
    file: PathBuf,
    identity: ModuleIdentity,
    document: PomDocument,
}

impl LoadedPom {
    fn load(file: PathBuf, identity: ModuleIdentity) -> BpgenResult<Self> {
        let document = PomDocument::load(&file)?;
        Ok(Self {
            file,
            identity,
            document,
        })
    }

    /// The `<parent>` identity; every coordinate is required.
    fn parent(&self) -> BpgenResult<Option<ModuleIdentity>> {
        let Some(coordinates) = &self.document.parent else {
            return Ok(None);
        };

        coordinates
            .complete()
            .map(Some)
            .map_err(|field| BpgenError::MalformedParentReference {
                module: self.identity.coordinate(),
                field,
                file: self.file.clone(),
            })
    }

    fn cache_root(&self) -> Option<&Path> {
        self.file.ancestors().nth(CACHE_ROOT_DEPTH)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DescriptorResolver {
    catalog: &'static LicenseCatalog,
}

impl Default for DescriptorResolver {
    fn default() -> Self {
        Self::new(LicenseCatalog::builtin())
    }
}

impl DescriptorResolver {
    pub fn new(catalog: &'static LicenseCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve the descriptor of the module owning `artifact`.
    pub fn resolve(
        &self,
        artifact: &Path,
        identity: &ModuleIdentity,
        sink: &dyn ResolveEventSink,
    ) -> BpgenResult<Descriptor> {
        // <version>/<sha1>/<file>
        let version_dir = artifact
            .parent()
            .and_then(Path::parent)
            .ok_or_else(|| BpgenError::descriptor_not_found(identity, artifact))?;

        let file = find_descriptor(version_dir, identity, sink)?;
        self.resolve_file(file, identity, sink)
    }

    /// Resolve a descriptor file directly.
    pub fn resolve_file(
        &self,
        file: PathBuf,
        identity: &ModuleIdentity,
        sink: &dyn ResolveEventSink,
    ) -> BpgenResult<Descriptor> {
        let pom = LoadedPom::load(file, identity.clone())?;

        let inception_year =
            self.resolve_field(&pom, "inceptionYear", sink, |p| inception_year(p, sink))?;
        let organization_name =
            self.resolve_field(&pom, "organization", sink, |p| p.document.organization.clone())?;
        let licenses = self.resolve_field(&pom, "licenses", sink, |p| self.licenses(p, sink))?;
        let developer_names =
            self.resolve_field(&pom, "developers", sink, |p| p.document.developers.clone())?;
        let dependencies = dependencies(&pom)?;

        Ok(Descriptor::new(
            pom.file,
            pom.identity,
            inception_year.flatten(),
            organization_name.flatten(),
            licenses.unwrap_or_default(),
            developer_names.unwrap_or_default(),
            dependencies,
        ))
    }

    /// Look a section up in `pom`, then in each parent in turn.
    ///
    /// `extract` returns `None` when the section is absent from a descriptor.
    /// The walk stops at the first descriptor that has the section, at the end
    /// of the chain, or when a parent would be visited twice.
    fn resolve_field<T>(
        &self,
        pom: &LoadedPom,
        field: &'static str,
        sink: &dyn ResolveEventSink,
        extract: impl Fn(&LoadedPom) -> Option<T>,
    ) -> BpgenResult<Option<T>> {
        if let Some(value) = extract(pom) {
            return Ok(Some(value));
        }

        let mut visited: HashSet<PathBuf> = HashSet::from([pom.file.clone()]);
        let mut current = match self.load_parent(pom, sink)? {
            Some(parent) => parent,
            None => return Ok(absent(pom, field, sink)),
        };

        loop {
            if !visited.insert(current.file.clone()) {
                return Ok(absent(pom, field, sink));
            }

            if let Some(value) = extract(&current) {
                emit(
                    sink,
                    ResolveEvent::FieldInherited {
                        module: pom.identity.coordinate(),
                        field,
                        parent: current.identity.coordinate(),
                    },
                );
                return Ok(Some(value));
            }

            current = match self.load_parent(&current, sink)? {
                Some(parent) => parent,
                None => return Ok(absent(pom, field, sink)),
            };
        }
    }

    fn load_parent(
        &self,
        pom: &LoadedPom,
        sink: &dyn ResolveEventSink,
    ) -> BpgenResult<Option<LoadedPom>> {
        let Some(parent) = pom.parent()? else {
            return Ok(None);
        };

        let root = pom
            .cache_root()
            .ok_or_else(|| BpgenError::descriptor_not_found(&parent, &pom.file))?;
        let dir = root
            .join(parent.group())
            .join(parent.name())
            .join(parent.version());

        let file = find_descriptor(&dir, &parent, sink)?;
        LoadedPom::load(file, parent).map(Some)
    }

    fn licenses(&self, pom: &LoadedPom, sink: &dyn ResolveEventSink) -> Option<Vec<License>> {
        let urls = pom.document.licenses.as_ref()?;
        let module = pom.identity.coordinate();

        Some(
            urls.iter()
                .filter_map(|url| {
                    let Some(url) = url else {
                        emit(
                            sink,
                            ResolveEvent::LicenseUrlMissing {
                                module: module.clone(),
                            },
                        );
                        return None;
                    };

                    let license = self.catalog.match_url(url);
                    if license.is_none() {
                        emit(
                            sink,
                            ResolveEvent::UnknownLicenseUrl {
                                module: module.clone(),
                                url: url.clone(),
                            },
                        );
                    }
                    license
                })
                .collect(),
        )
    }
}

fn absent<T>(pom: &LoadedPom, field: &'static str, sink: &dyn ResolveEventSink) -> Option<T> {
    emit(
        sink,
        ResolveEvent::FieldAbsent {
            module: pom.identity.coordinate(),
            field,
        },
    );
    None
}

/// `Some(None)` when the element exists but is not a year.
fn inception_year(pom: &LoadedPom, sink: &dyn ResolveEventSink) -> Option<Option<i32>> {
    let value = pom.document.inception_year.as_ref()?;
    match value.parse() {
        Ok(year) => Some(Some(year)),
        Err(_) => {
            emit(
                sink,
                ResolveEvent::InvalidInceptionYear {
                    module: pom.identity.coordinate(),
                    value: value.clone(),
                },
            );
            Some(None)
        }
    }
}

fn dependencies(pom: &LoadedPom) -> BpgenResult<Vec<ModuleIdentity>> {
    let Some(dependencies) = &pom.document.dependencies else {
        return Ok(Vec::new());
    };

    dependencies
        .iter()
        .map(|coordinates| {
            coordinates
                .complete()
                .map_err(|field| BpgenError::MalformedDependencyReference {
                    module: pom.identity.coordinate(),
                    field,
                    file: pom.file.clone(),
                })
        })
        .collect()
}

/// The `.pom` inside a version directory. Several candidates are sorted by
/// path and the first one wins.
fn find_descriptor(
    dir: &Path,
    identity: &ModuleIdentity,
    sink: &dyn ResolveEventSink,
) -> BpgenResult<PathBuf> {
    if !dir.is_dir() {
        return Err(BpgenError::descriptor_not_found(identity, dir));
    }

    let mut candidates: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext == DESCRIPTOR_EXTENSION)
        })
        .collect();
    candidates.sort();

    let count = candidates.len();
    let chosen = candidates
        .into_iter()
        .next()
        .ok_or_else(|| BpgenError::descriptor_not_found(identity, dir))?;

    if count > 1 {
        emit(
            sink,
            ResolveEvent::MultipleDescriptors {
                module: identity.coordinate(),
                chosen: chosen.clone(),
                count,
            },
        );
    }

    Ok(chosen)
}
