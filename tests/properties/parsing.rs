//! Property tests for external inputs: descriptors and resolved trees.

use proptest::prelude::*;

use bpgen::domain::ports::NoopEventSink;
use bpgen::domain::services::{DependencyGraphBuilder, PomDocument};
use bpgen::{LicenseCatalog, ResolvedTree};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: descriptor parsing never panics on arbitrary input.
    #[test]
    fn property_descriptor_parse_never_panics(s in "(?s).{0,256}") {
        let _ = PomDocument::parse(&s);
        let _ = PomDocument::parse(&format!("<project>{}</project>", s));
    }

    /// PROPERTY: license matching never panics on arbitrary input.
    #[test]
    fn property_license_match_never_panics(s in "(?s).{0,128}") {
        let _ = LicenseCatalog::builtin().match_url(&s);
    }

    /// PROPERTY: unknown hosts never match.
    #[test]
    fn property_unknown_hosts_never_match(path in "[a-zA-Z0-9/._-]{0,40}") {
        let url = format!("https://licenses.example.invalid/{}", path);
        prop_assert!(LicenseCatalog::builtin().match_url(&url).is_none());
    }

    /// PROPERTY: any well-formed tree with in-range edges plans without
    /// panicking, and every distinct name is planned exactly once.
    #[test]
    fn property_trees_plan_each_name_once(
        edges in proptest::collection::vec(proptest::collection::vec(0usize..8, 0..4), 1..8),
        names in proptest::collection::vec("[a-c]", 8),
    ) {
        let count = edges.len();
        let nodes: Vec<serde_json::Value> = edges
            .iter()
            .enumerate()
            .map(|(i, children)| {
                let children: Vec<usize> = children.iter().map(|c| c % count).collect();
                serde_json::json!({
                    "group": "g",
                    "name": names[i],
                    "version": i.to_string(),
                    "children": children,
                })
            })
            .collect();
        let roots: Vec<usize> = (0..count).collect();
        let json = serde_json::json!({ "roots": roots, "nodes": nodes }).to_string();

        let tree = ResolvedTree::from_json(&json).unwrap();
        let planned = DependencyGraphBuilder::new().plan(&tree, &NoopEventSink);

        let mut distinct: Vec<&String> = names[..count].iter().collect();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(planned.len(), distinct.len());
    }
}
