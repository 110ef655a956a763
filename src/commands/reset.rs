//! Destructive reset: wipe the destination and reinstall defaults.
use anyhow::{Context as _, Result};

use crate::logging::Logger;
use crate::resources::fs::copy_dir_recursive;

use super::Paths;

/// Run a reset.
///
/// Irreversibly removes the entire destination tree, then performs the
/// same verbatim recursive copy as a fresh install. The only destructive,
/// non-recoverable operation in the tool: all user customizations and
/// side-car files are destroyed without staging or backup.
///
/// # Errors
///
/// Returns an error if the destination cannot be removed or the copy
/// fails.
pub fn run(paths: &Paths, log: &Logger) -> Result<()> {
    log.stage("Resetting .devcontainer to package defaults");

    std::fs::remove_dir_all(&paths.dest)
        .with_context(|| format!("removing {}", paths.dest.display()))?;
    copy_dir_recursive(&paths.source, &paths.dest)?;

    log.info("Reset complete. All user customizations removed.");
    super::install::print_next_steps(log);
    Ok(())
}
