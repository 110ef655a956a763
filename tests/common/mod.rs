// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed package/project fixture so each
// integration test can set up an isolated environment without repeating
// filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use codeforge_cli::commands::Paths;
use codeforge_cli::logging::Logger;

/// Relative paths and contents of the default package tree written by
/// [`Fixture::new`].
pub const DEFAULT_PACKAGE_FILES: &[(&str, &str)] = &[
    ("devcontainer.json", "{\n  \"name\": \"codeforge\"\n}\n"),
    ("config/defaults/settings.json", "{ \"theme\": \"dark\" }\n"),
    ("config/defaults/keybindings.json", "[]\n"),
    ("config/file-manifest.json", "{ \"files\": [] }\n"),
    ("scripts/setup.sh", "#!/bin/sh\necho setup\n"),
    ("README.md", "# CodeForge DevContainer\n"),
];

/// An isolated package source tree and project directory backed by a
/// [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    /// Create a fixture whose package tree holds the default files and
    /// whose project directory is empty.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let fixture = Self { dir };
        for (rel, content) in DEFAULT_PACKAGE_FILES {
            fixture.write_source(rel, content);
        }
        fixture
    }

    /// Source and destination roots for dispatching against this fixture.
    pub fn paths(&self) -> Paths {
        Paths {
            source: self.dir.path().join("package/.devcontainer"),
            dest: self.dir.path().join("project/.devcontainer"),
        }
    }

    /// Write `content` to `rel` inside the package source tree.
    pub fn write_source(&self, rel: &str, content: &str) {
        write_file(&self.paths().source.join(rel), content);
    }

    /// Write `content` to `rel` inside the destination tree.
    pub fn write_dest(&self, rel: &str, content: &str) {
        write_file(&self.paths().dest.join(rel), content);
    }

    /// Absolute path of `rel` inside the destination tree.
    pub fn dest_path(&self, rel: &str) -> PathBuf {
        self.paths().dest.join(rel)
    }

    /// Read `rel` from the destination tree as a string.
    pub fn read_dest(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dest_path(rel)).expect("read destination file")
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dirs");
    }
    std::fs::write(path, content).expect("write file");
}

/// Logger for tests; no subscriber is installed, so events are discarded.
pub fn test_logger() -> Logger {
    Logger::new("test")
}

/// Collect every file under `root` as a map from forward-slash relative
/// path to contents, for byte-for-byte tree comparisons.
pub fn snapshot_tree(root: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut files = BTreeMap::new();
    collect(root, "", &mut files);
    files
}

fn collect(dir: &Path, rel_base: &str, files: &mut BTreeMap<String, Vec<u8>>) {
    for entry in std::fs::read_dir(dir).expect("read dir") {
        let entry = entry.expect("read entry");
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        let rel = if rel_base.is_empty() {
            name
        } else {
            format!("{rel_base}/{name}")
        };
        if path.is_dir() {
            collect(&path, &rel, files);
        } else {
            files.insert(rel, std::fs::read(&path).expect("read file"));
        }
    }
}
