//! Reusable descriptor fragments.

pub const APACHE_LICENSE: &str = r#"<licenses>
    <license>
      <name>The Apache Software License, Version 2.0</name>
      <url>https://www.apache.org/licenses/LICENSE-2.0.txt</url>
    </license>
  </licenses>"#;

pub const MIT_LICENSE: &str = r#"<licenses>
    <license><url>https://opensource.org/licenses/MIT</url></license>
  </licenses>"#;

pub fn organization(name: &str) -> String {
    format!("<organization><name>{}</name></organization>", name)
}

pub fn developers(names: &[&str]) -> String {
    let entries: String = names
        .iter()
        .map(|name| format!("<developer><name>{}</name></developer>", name))
        .collect();
    format!("<developers>{}</developers>", entries)
}

pub fn inception_year(year: &str) -> String {
    format!("<inceptionYear>{}</inceptionYear>", year)
}

pub fn parent(group: &str, name: &str, version: &str) -> String {
    format!(
        "<parent><groupId>{}</groupId><artifactId>{}</artifactId><version>{}</version></parent>",
        group, name, version
    )
}

pub fn uses_sdk_manifest(target: Option<u32>, min: Option<u32>) -> String {
    let mut attrs = String::new();
    if let Some(min) = min {
        attrs.push_str(&format!(r#" android:minSdkVersion="{}""#, min));
    }
    if let Some(target) = target {
        attrs.push_str(&format!(r#" android:targetSdkVersion="{}""#, target));
    }
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<manifest xmlns:android="http://schemas.android.com/apk/res/android" package="com.example">
    <uses-sdk{} />
</manifest>"#,
        attrs
    )
}
