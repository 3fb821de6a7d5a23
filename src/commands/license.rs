use anyhow::{bail, Result};

use crate::domain::value_objects::LicenseCatalog;

pub fn cmd_license(url: &str, json: bool) -> Result<()> {
    let Some(license) = LicenseCatalog::builtin().match_url(url) else {
        bail!("no known license matches {}", url);
    };

    if json {
        println!(
            "{}",
            serde_json::json!({ "url": url, "spdx_id": license.spdx_id() })
        );
    } else {
        println!("{}", license);
    }

    Ok(())
}
