//! Fixtures shared by unit tests: Gradle-style artifact caches and archives.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ModuleIdentity;

/// Write a zip archive with the given entries, in order.
pub fn write_zip(path: &Path, entries: &[(&str, &str)]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let file = fs::File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored);
    for (name, content) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}

/// `<root>/<group>/<name>/<version>/<hash>/`, the Gradle files-2.1 layout.
pub fn module_dir(root: &Path, id: &ModuleIdentity, hash: &str) -> PathBuf {
    root.join(id.group())
        .join(id.name())
        .join(id.version())
        .join(hash)
}

/// Write `<name>-<version>.pom` into the cache and return its path.
pub fn write_pom(root: &Path, id: &ModuleIdentity, body: &str) -> PathBuf {
    let dir = module_dir(root, id, "pomhash");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{}-{}.pom", id.name(), id.version()));
    fs::write(
        &path,
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>{}</groupId>
  <artifactId>{}</artifactId>
  <version>{}</version>
{}
</project>
"#,
            id.group(),
            id.name(),
            id.version(),
            body
        ),
    )
    .unwrap();
    path
}

/// Path an artifact file would have in the cache (not created).
pub fn artifact_path(root: &Path, id: &ModuleIdentity, extension: &str) -> PathBuf {
    module_dir(root, id, "filehash").join(format!("{}-{}.{}", id.name(), id.version(), extension))
}

pub fn manifest(target: Option<&str>, min: Option<&str>) -> String {
    let mut attrs = String::new();
    if let Some(min) = min {
        attrs.push_str(&format!(r#" android:minSdkVersion="{}""#, min));
    }
    if let Some(target) = target {
        attrs.push_str(&format!(r#" android:targetSdkVersion="{}""#, target));
    }
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<manifest xmlns:android="http://schemas.android.com/apk/res/android" package="com.example.lib">
    <uses-sdk{} />
</manifest>
"#,
        attrs
    )
}
