//! License catalog
//!
//! Descriptors declare licenses by URL. The catalog maps those URLs to SPDX
//! identifiers with an ordered `(pattern, license)` table scanned linearly;
//! the first matching entry wins.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A license bpgen knows how to attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum License {
    #[serde(rename = "Apache-2.0")]
    Apache2,
    #[serde(rename = "BSD-2-Clause")]
    Bsd2Clause,
    #[serde(rename = "BSD-3-Clause")]
    Bsd3Clause,
    #[serde(rename = "GPL-3.0")]
    Gpl3,
    #[serde(rename = "LGPL-3.0")]
    Lgpl3,
    #[serde(rename = "MIT")]
    Mit,
}

impl License {
    pub const ALL: [License; 6] = [
        License::Apache2,
        License::Bsd2Clause,
        License::Bsd3Clause,
        License::Gpl3,
        License::Lgpl3,
        License::Mit,
    ];

    pub fn spdx_id(&self) -> &'static str {
        match self {
            License::Apache2 => "Apache-2.0",
            License::Bsd2Clause => "BSD-2-Clause",
            License::Bsd3Clause => "BSD-3-Clause",
            License::Gpl3 => "GPL-3.0",
            License::Lgpl3 => "LGPL-3.0",
            License::Mit => "MIT",
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spdx_id())
    }
}

// Declaration order is match order.
const PATTERNS: &[(&str, License)] = &[
    (
        r"(?i)^https?://(www\.)?apache\.org/licenses/LICENSE-2\.0(\.(txt|html))?/?([#?].*)?$",
        License::Apache2,
    ),
    (
        r"(?i)^https?://(www\.)?opensource\.org/licenses/Apache-2\.0/?([#?].*)?$",
        License::Apache2,
    ),
    (
        r"(?i)^https?://(www\.)?opensource\.org/licenses/BSD-2-Clause/?([#?].*)?$",
        License::Bsd2Clause,
    ),
    (
        r"(?i)^https?://(www\.)?opensource\.org/licenses/BSD-3-Clause/?([#?].*)?$",
        License::Bsd3Clause,
    ),
    (
        r"(?i)^https?://(www\.)?gnu\.org/licenses/gpl-3\.0(\.(txt|html|en\.html))?/?([#?].*)?$",
        License::Gpl3,
    ),
    (
        r"(?i)^https?://(www\.)?gnu\.org/licenses/lgpl-3\.0(\.(txt|html|en\.html))?/?([#?].*)?$",
        License::Lgpl3,
    ),
    (
        r"(?i)^https?://(www\.)?opensource\.org/licenses/(MIT|mit-license(\.php)?)/?([#?].*)?$",
        License::Mit,
    ),
];

static CATALOG: Lazy<LicenseCatalog> = Lazy::new(|| LicenseCatalog {
    entries: PATTERNS
        .iter()
        .filter_map(|(pattern, license)| Regex::new(pattern).ok().map(|re| (re, *license)))
        .collect(),
});

/// Ordered URL pattern table.
#[derive(Debug)]
pub struct LicenseCatalog {
    entries: Vec<(Regex, License)>,
}

impl LicenseCatalog {
    /// The built-in catalog.
    pub fn builtin() -> &'static LicenseCatalog {
        &CATALOG
    }

    /// First license whose pattern matches `url`, if any.
    pub fn match_url(&self, url: &str) -> Option<License> {
        let url = url.trim();
        self.entries
            .iter()
            .find(|(re, _)| re.is_match(url))
            .map(|(_, license)| *license)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Deduplicate while keeping declaration order.
pub fn dedup_licenses(licenses: &[License]) -> Vec<License> {
    let mut seen = Vec::with_capacity(licenses.len());
    for license in licenses {
        if !seen.contains(license) {
            seen.push(*license);
        }
    }
    seen
}
