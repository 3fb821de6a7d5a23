//! Property tests for attribution text shape.

use proptest::prelude::*;

use bpgen::domain::services::CopyrightComposer;
use bpgen::License;

fn license() -> impl Strategy<Value = License> {
    proptest::sample::select(License::ALL.to_vec())
}

fn holder() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][a-z]{1,8}( [A-Z][a-z]{1,8})?").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: one copyright line per holder, at most one license line,
    /// and a blank separator only when both are present.
    #[test]
    fn property_attribution_shape(
        licenses in proptest::collection::vec(license(), 0..6),
        holders in proptest::collection::vec(holder(), 0..4),
        year in proptest::option::of(1990i32..2030),
    ) {
        let text = CopyrightComposer::compose(&licenses, &holders, year);

        if licenses.is_empty() && holders.is_empty() {
            prop_assert_eq!(text, "");
            return Ok(());
        }

        prop_assert!(text.ends_with('\n'));
        prop_assert!(!text.starts_with('\n'));
        prop_assert!(!text.contains("\n\n\n"));

        let lines: Vec<&str> = text.lines().collect();
        let copyright_lines = lines
            .iter()
            .filter(|l| l.starts_with("SPDX-FileCopyrightText: "))
            .count();
        let license_lines = lines
            .iter()
            .filter(|l| l.starts_with("SPDX-License-Identifier: "))
            .count();
        let blank_lines = lines.iter().filter(|l| l.is_empty()).count();

        prop_assert_eq!(copyright_lines, holders.len());
        prop_assert_eq!(license_lines, usize::from(!licenses.is_empty()));
        prop_assert_eq!(
            blank_lines,
            usize::from(!licenses.is_empty() && !holders.is_empty())
        );
    }

    /// PROPERTY: each SPDX id appears once however often it is declared.
    #[test]
    fn property_licenses_deduplicated(
        licenses in proptest::collection::vec(license(), 1..12),
    ) {
        let text = CopyrightComposer::compose(&licenses, &[], None);

        for license in &licenses {
            let id = format!(" {} ", license.spdx_id());
            let padded = format!(" {} ", text.trim_end().replace(" AND ", "  "));
            prop_assert_eq!(padded.matches(&id).count(), 1);
        }
    }
}
