//! Selective tree reconciliation for `--force` updates.
//!
//! Walks the package tree in lock-step with the destination tree and
//! applies exactly one outcome per file. Files present only in the
//! destination are never visited, so user-created files are never touched.
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::config::preserve::PreserveSet;
use crate::config::{BACKUP_SUFFIX, SPECIAL_FILE, STAGED_SUFFIX};

/// Classification applied to a single package file during an update walk.
///
/// Outcomes are mutually exclusive and exhaustive over the files visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Destination existed with no special status and was replaced.
    Overwritten,
    /// Destination did not exist; the package version was created.
    Added,
    /// Destination kept untouched; the package version was staged under
    /// the `.codeforge-new` side-car suffix.
    Preserved,
    /// Container descriptor: destination saved to `.bak`, then overwritten.
    BackedUp,
}

/// Decide the outcome for one package file.
///
/// Rules are evaluated in precedence order; the first match wins:
///
/// 1. the top-level container descriptor with an existing destination is
///    backed up and overwritten
/// 2. a preserved path with an existing destination is kept and the
///    package version staged
/// 3. everything else is created when absent, overwritten when present
///
/// A preserved path whose destination does not yet exist falls through to
/// rule 3: preservation protects existing customizations, not absence.
#[must_use]
pub fn classify(rel_path: &str, dest_exists: bool, preserve: &PreserveSet) -> Outcome {
    if rel_path == SPECIAL_FILE && dest_exists {
        return Outcome::BackedUp;
    }
    if preserve.contains(rel_path) && dest_exists {
        return Outcome::Preserved;
    }
    if dest_exists {
        Outcome::Overwritten
    } else {
        Outcome::Added
    }
}

/// Counters accumulated across one reconciliation walk.
///
/// Created at the start of a run and discarded at the end; nothing is
/// persisted if the walk fails part-way.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncStats {
    /// Files overwritten with the package version (includes backed-up).
    pub updated: usize,
    /// Files created because they were absent from the destination.
    pub added: usize,
    /// Files left untouched with a staged `.codeforge-new` side-car.
    pub preserved: usize,
    /// Container descriptors saved to `.bak` before overwrite.
    pub backed_up: usize,
    /// Relative paths of preserved files, in traversal order.
    pub preserved_files: Vec<String>,
}

impl SyncStats {
    fn record(&mut self, outcome: Outcome, rel_path: &str) {
        match outcome {
            Outcome::Overwritten => self.updated += 1,
            Outcome::Added => self.added += 1,
            Outcome::Preserved => {
                self.preserved += 1;
                self.preserved_files.push(rel_path.to_string());
            }
            Outcome::BackedUp => {
                // A backup is also an update of the destination file.
                self.backed_up += 1;
                self.updated += 1;
            }
        }
    }
}

/// Walk the package tree and reconcile it into the destination tree.
///
/// Depth-first with directory entries sorted by name, so traversal order
/// and the staged-file report are deterministic. Destination directories
/// (including intermediates) are created before any file beneath them is
/// processed.
///
/// # Errors
///
/// Returns an error on the first failed filesystem operation. Files
/// processed before the failure keep their new state; there is no
/// rollback.
pub fn sync_tree(src: &Path, dest: &Path, preserve: &PreserveSet) -> Result<SyncStats> {
    let mut stats = SyncStats::default();
    walk(src, dest, "", preserve, &mut stats)?;
    Ok(stats)
}

fn walk(
    src_dir: &Path,
    dest_dir: &Path,
    rel_base: &str,
    preserve: &PreserveSet,
    stats: &mut SyncStats,
) -> Result<()> {
    std::fs::create_dir_all(dest_dir)
        .with_context(|| format!("creating directory {}", dest_dir.display()))?;

    let mut entries: Vec<std::fs::DirEntry> = std::fs::read_dir(src_dir)
        .with_context(|| format!("reading directory {}", src_dir.display()))?
        .collect::<std::io::Result<_>>()
        .with_context(|| format!("reading entry in {}", src_dir.display()))?;
    entries.sort_by_key(std::fs::DirEntry::file_name);

    for entry in entries {
        let src_path = entry.path();
        let dest_path = dest_dir.join(entry.file_name());
        let name = entry.file_name().to_string_lossy().into_owned();
        let rel_path = if rel_base.is_empty() {
            name
        } else {
            format!("{rel_base}/{name}")
        };

        if src_path.is_dir() {
            walk(&src_path, &dest_path, &rel_path, preserve, stats)?;
            continue;
        }

        let outcome = classify(&rel_path, dest_path.exists(), preserve);
        match outcome {
            Outcome::BackedUp => {
                let backup = sidecar(&dest_path, BACKUP_SUFFIX);
                std::fs::copy(&dest_path, &backup).with_context(|| {
                    format!(
                        "backing up {} to {}",
                        dest_path.display(),
                        backup.display()
                    )
                })?;
                copy_file(&src_path, &dest_path)?;
                tracing::debug!("backed up and overwrote {rel_path}");
            }
            Outcome::Preserved => {
                let staged = sidecar(&dest_path, STAGED_SUFFIX);
                copy_file(&src_path, &staged)?;
                tracing::debug!("preserved {rel_path}, staged package version");
            }
            Outcome::Overwritten | Outcome::Added => {
                copy_file(&src_path, &dest_path)?;
                tracing::debug!("copied {rel_path}");
            }
        }
        stats.record(outcome, &rel_path);
    }

    Ok(())
}

/// Append a side-car suffix to a path without touching its extension.
fn sidecar(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    std::fs::copy(src, dst)
        .with_context(|| format!("copying {} to {}", src.display(), dst.display()))?;
    Ok(())
}
