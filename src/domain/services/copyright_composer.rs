//! REUSE attribution text
//!
//! Renders copyright holders and licenses as SPDX header lines, the content of
//! an artifact's `.license` sidecar:
//!
//! ```text
//! SPDX-FileCopyrightText: 2019 Jane Doe
//!
//! SPDX-License-Identifier: Apache-2.0
//! ```

use crate::domain::entities::Descriptor;
use crate::domain::ports::{emit, ResolveEvent, ResolveEventSink};
use crate::domain::value_objects::{dedup_licenses, License};

const COPYRIGHT_PREFIX: &str = "SPDX-FileCopyrightText: ";
const LICENSE_PREFIX: &str = "SPDX-License-Identifier: ";
const LICENSE_SEPARATOR: &str = " AND ";

pub struct CopyrightComposer;

impl CopyrightComposer {
    /// An empty string means there is nothing to write.
    pub fn compose(
        licenses: &[License],
        copyright_holders: &[String],
        inception_year: Option<i32>,
    ) -> String {
        let mut content = String::new();

        for holder in copyright_holders {
            content.push_str(COPYRIGHT_PREFIX);
            if let Some(year) = inception_year {
                content.push_str(&year.to_string());
                content.push(' ');
            }
            content.push_str(holder);
            content.push('\n');
        }

        let spdx_ids: Vec<&str> = dedup_licenses(licenses)
            .iter()
            .map(License::spdx_id)
            .collect();

        if !spdx_ids.is_empty() {
            if !content.is_empty() {
                content.push('\n');
            }
            content.push_str(LICENSE_PREFIX);
            content.push_str(&spdx_ids.join(LICENSE_SEPARATOR));
            content.push('\n');
        }

        content
    }

    /// Attribution for a resolved descriptor. Missing licenses or holders are
    /// reported and never fatal.
    pub fn compose_for(descriptor: &Descriptor, sink: &dyn ResolveEventSink) -> String {
        let module = descriptor.identity().coordinate();
        let licenses = descriptor.unique_licenses();
        let holders = descriptor.copyright_holders();

        if licenses.is_empty() {
            emit(
                sink,
                ResolveEvent::NoLicenses {
                    module: module.clone(),
                },
            );
        }
        if holders.is_empty() {
            emit(sink, ResolveEvent::NoCopyrightHolders { module });
        }

        Self::compose(&licenses, &holders, descriptor.inception_year())
    }
}
