//! Module Identity Value Object
//!
//! The `(group, name, version)` key of a library module.
//!
//! Equality, hashing and ordering look at `(group, name)` only. Two versions
//! of the same library are the *same* module: the dependency graph mirrors a
//! single resolved classpath, so version skew collapses into one node.
//! `version` is carried for display and cache paths.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleIdentity {
    group: String,
    name: String,
    version: String,
}

impl ModuleIdentity {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// `group:name:version`
    pub fn coordinate(&self) -> String {
        format!("{}:{}:{}", self.group, self.name, self.version)
    }

    /// `group:name`, the key used for quirks and lookups.
    pub fn key(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }

    /// Relative module path in the target tree, e.g. `androidx/core/core/1.12.0`.
    pub fn relative_path(&self) -> String {
        format!(
            "{}/{}/{}",
            self.group.replace('.', "/"),
            self.name,
            self.version
        )
    }
}

impl PartialEq for ModuleIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group && self.name == other.name
    }
}

impl Eq for ModuleIdentity {}

impl Hash for ModuleIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group.hash(state);
        self.name.hash(state);
    }
}

impl Ord for ModuleIdentity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.group
            .cmp(&other.group)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for ModuleIdentity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ModuleIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of(id: &ModuleIdentity) -> u64 {
        let mut hasher = DefaultHasher::new();
        id.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn different_versions_are_the_same_module() {
        let a = ModuleIdentity::new("androidx.core", "core", "1.9.0");
        let b = ModuleIdentity::new("androidx.core", "core", "1.12.0");

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_ne!(a.coordinate(), b.coordinate());
    }

    #[test]
    fn version_skew_collapses_in_sets() {
        let mut set = HashSet::new();
        set.insert(ModuleIdentity::new("g", "n", "1"));
        set.insert(ModuleIdentity::new("g", "n", "2"));
        assert_eq!(set.len(), 1);
        // First insertion wins
        assert_eq!(set.iter().next().unwrap().version(), "1");
    }

    #[test]
    fn ordering_is_group_then_name() {
        let mut ids = vec![
            ModuleIdentity::new("b", "a", "1"),
            ModuleIdentity::new("a", "z", "1"),
            ModuleIdentity::new("a", "b", "9"),
        ];
        ids.sort();
        let keys: Vec<String> = ids.iter().map(ModuleIdentity::key).collect();
        assert_eq!(keys, vec!["a:b", "a:z", "b:a"]);
    }

    #[test]
    fn relative_path_replaces_group_dots() {
        let id = ModuleIdentity::new("com.google.android.material", "material", "1.11.0");
        assert_eq!(
            id.relative_path(),
            "com/google/android/material/material/1.11.0"
        );
        assert_eq!(id.coordinate(), "com.google.android.material:material:1.11.0");
        assert_eq!(id.to_string(), id.coordinate());
    }
}
