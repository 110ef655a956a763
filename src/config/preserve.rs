//! Builds the effective set of relative paths exempt from overwrite.
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::PreserveError;

use super::{DEFAULT_PRESERVE, PRESERVE_FILE};

/// The effective preserve set for one update run.
///
/// Union of the built-in list and the entries parsed from the
/// destination-local exclusion file. Membership is exact, case-sensitive
/// relative-path equality with forward-slash separators. Immutable once
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreserveSet {
    paths: BTreeSet<String>,
}

impl PreserveSet {
    /// The built-in defaults with no user additions.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            paths: DEFAULT_PRESERVE.iter().map(|p| (*p).to_string()).collect(),
        }
    }

    /// Load the effective preserve set for the given destination root.
    ///
    /// A missing exclusion file yields exactly the built-in list. Lines are
    /// trimmed; blank lines and `#` comments are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`PreserveError::Unreadable`] if the exclusion file exists
    /// but cannot be read.
    pub fn load(dest_root: &Path) -> Result<Self, PreserveError> {
        let mut set = Self::builtin();
        let file = dest_root.join(PRESERVE_FILE);

        match std::fs::read_to_string(&file) {
            Ok(text) => {
                for line in text.lines() {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    set.paths.insert(line.to_string());
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(PreserveError::Unreadable {
                    path: file.display().to_string(),
                    source,
                });
            }
        }

        Ok(set)
    }

    /// Whether `rel_path` is exempt from overwrite.
    #[must_use]
    pub fn contains(&self, rel_path: &str) -> bool {
        self.paths.contains(rel_path)
    }

    /// Number of paths in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
