//! Gradle artifact cache builder.
//!
//! Layout: `<root>/<group>/<name>/<version>/<sha1>/<file>`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use tempfile::TempDir;

pub struct GradleCache {
    root: TempDir,
}

impl Default for GradleCache {
    fn default() -> Self {
        Self::new()
    }
}

impl GradleCache {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    fn file(&self, group: &str, name: &str, version: &str, hash: &str, ext: &str) -> PathBuf {
        let dir = self.root().join(group).join(name).join(version).join(hash);
        fs::create_dir_all(&dir).unwrap();
        dir.join(format!("{}-{}.{}", name, version, ext))
    }

    /// Write a `.pom` whose project element wraps `body`.
    pub fn pom(&self, group: &str, name: &str, version: &str, body: &str) -> PathBuf {
        let path = self.file(group, name, version, "0a1b2c", "pom");
        fs::write(
            &path,
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>{group}</groupId>
  <artifactId>{name}</artifactId>
  <version>{version}</version>
  {body}
</project>
"#
            ),
        )
        .unwrap();
        path
    }

    /// Write an `.aar` with the given entries, in order.
    pub fn aar(&self, group: &str, name: &str, version: &str, entries: &[(&str, &str)]) -> PathBuf {
        let path = self.file(group, name, version, "9f8e7d", "aar");
        let mut zip = zip::ZipWriter::new(fs::File::create(&path).unwrap());
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        for (entry, content) in entries {
            zip.start_file(*entry, options).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
        path
    }

    /// A `.jar` path; code archives are never opened, so any content will do.
    pub fn jar(&self, group: &str, name: &str, version: &str) -> PathBuf {
        let path = self.file(group, name, version, "9f8e7d", "jar");
        fs::write(&path, b"PK").unwrap();
        path
    }
}

/// One node of a tree JSON document.
pub fn tree_node(
    group: &str,
    name: &str,
    version: &str,
    artifact: Option<&Path>,
    children: &[usize],
) -> Value {
    let artifacts: Vec<Value> = artifact
        .map(|file| json!({ "file": file.display().to_string() }))
        .into_iter()
        .collect();
    json!({
        "group": group,
        "name": name,
        "version": version,
        "children": children,
        "artifacts": artifacts,
    })
}

pub fn tree_json(nodes: Vec<Value>) -> String {
    json!({ "nodes": nodes }).to_string()
}
