//! Property tests for identity equality and the graph's version collapse.

use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use bpgen::ModuleIdentity;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9._-]{0,12}").unwrap()
}

fn version() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9]{1,2}(\\.[0-9]{1,2}){0,2}(-[a-z]{1,5})?").unwrap()
}

fn hash_of(identity: &ModuleIdentity) -> u64 {
    let mut hasher = DefaultHasher::new();
    identity.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: identities with the same group and name are equal, hash
    /// alike and compare equal whatever their versions.
    #[test]
    fn property_version_is_ignored(
        group in segment(),
        name in segment(),
        a in version(),
        b in version(),
    ) {
        let left = ModuleIdentity::new(&group, &name, &a);
        let right = ModuleIdentity::new(&group, &name, &b);

        prop_assert_eq!(&left, &right);
        prop_assert_eq!(hash_of(&left), hash_of(&right));
        prop_assert_eq!(left.cmp(&right), std::cmp::Ordering::Equal);

        let set: BTreeSet<ModuleIdentity> = [left.clone(), right].into_iter().collect();
        prop_assert_eq!(set.len(), 1);
        let kept = set.into_iter().next().unwrap();
        prop_assert_eq!(kept.version(), a.as_str());
    }

    /// PROPERTY: different names are never equal.
    #[test]
    fn property_name_distinguishes(
        group in segment(),
        a in segment(),
        b in segment(),
        v in version(),
    ) {
        prop_assume!(a != b);
        prop_assert_ne!(
            ModuleIdentity::new(&group, &a, &v),
            ModuleIdentity::new(&group, &b, &v)
        );
    }

    /// PROPERTY: the relative path has no dots in the group part.
    #[test]
    fn property_relative_path_splits_group(
        parts in proptest::collection::vec("[a-z]{1,8}", 1..4),
        name in "[a-z]{1,8}",
        v in version(),
    ) {
        let group = parts.join(".");
        let identity = ModuleIdentity::new(&group, &name, &v);

        prop_assert_eq!(
            identity.relative_path(),
            format!("{}/{}/{}", parts.join("/"), name, v)
        );
    }
}
