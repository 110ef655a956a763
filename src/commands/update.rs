//! Selective update: reconcile the package tree, preserving user config.
use anyhow::Result;

use crate::config::preserve::PreserveSet;
use crate::config::{BACKUP_SUFFIX, SPECIAL_FILE, STAGED_SUFFIX};
use crate::logging::Logger;
use crate::resources::sync::sync_tree;

use super::Paths;

/// Run a selective update.
///
/// Loads the effective preserve set, reconciles the package tree into the
/// destination, and reports the per-outcome counts plus the list of staged
/// side-car files for manual review.
///
/// # Errors
///
/// Returns an error if the preserve file exists but is unreadable, or any
/// filesystem operation during the walk fails. A mid-walk failure leaves
/// already-processed files in their new state; re-running is the recovery
/// path.
pub fn run(paths: &Paths, log: &Logger) -> Result<()> {
    log.stage("Updating .devcontainer (preserving user config)");

    let preserve = PreserveSet::load(&paths.dest)?;
    log.debug(&format!("effective preserve set: {} paths", preserve.len()));

    let stats = sync_tree(&paths.source, &paths.dest, &preserve)?;

    log.info(&format!("Updated:   {} files", stats.updated));
    log.info(&format!("Added:     {} new files", stats.added));
    log.info(&format!("Preserved: {} user config files", stats.preserved));

    if stats.backed_up > 0 {
        log.info(&format!(
            "{SPECIAL_FILE} updated (previous saved as {SPECIAL_FILE}{BACKUP_SUFFIX})"
        ));
    }

    if !stats.preserved_files.is_empty() {
        log.info(&format!(
            "Review {STAGED_SUFFIX} files for new defaults you may want to merge:"
        ));
        for file in &stats.preserved_files {
            log.info(&format!("  {file}{STAGED_SUFFIX}"));
        }
    }

    super::install::print_next_steps(log);
    Ok(())
}
