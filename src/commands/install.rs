//! Fresh install: verbatim copy of the bundled tree.
use anyhow::Result;

use crate::logging::Logger;
use crate::resources::fs::copy_dir_recursive;

use super::Paths;

/// Run a fresh install.
///
/// Plain recursive copy of the package tree with no policy branching;
/// only reached when the destination does not exist.
///
/// # Errors
///
/// Returns an error if any directory or file cannot be copied.
pub fn run(paths: &Paths, log: &Logger) -> Result<()> {
    log.stage("Setting up CodeForge DevContainer");

    copy_dir_recursive(&paths.source, &paths.dest)?;
    log.info("CodeForge DevContainer configuration installed");

    print_next_steps(log);
    print_features(log);
    Ok(())
}

/// Print the post-run guidance shared by install, update, and reset.
pub(super) fn print_next_steps(log: &Logger) {
    log.info("Next steps:");
    log.info("  1. Open this folder in VS Code");
    log.info("  2. Select \"Reopen in Container\" from the command palette");
    log.info("Documentation: .devcontainer/README.md");
}

fn print_features(log: &Logger) {
    log.info("Features included:");
    log.info("  - Preconfigured development container with CLI tooling");
    log.info("  - Persistent configuration and shell history");
    log.info("  - Selective updates that keep your customizations");
}
