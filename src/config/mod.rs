//! Policy constants and the preserve-set loader.
//!
//! All repo-convention names live here as constants so the per-file update
//! policy stays an explicit, testable rule list rather than scattered
//! string literals.

pub mod preserve;

/// Name of the bundled and destination devcontainer directory.
pub const DEVCONTAINER_DIR: &str = ".devcontainer";

/// The top-level container descriptor. The only file that is backed up to a
/// `.bak` side-car before being overwritten during update.
pub const SPECIAL_FILE: &str = "devcontainer.json";

/// Destination-local exclusion file: newline-delimited relative paths to
/// preserve, `#`-prefixed comments ignored.
pub const PRESERVE_FILE: &str = ".codeforge-preserve";

/// Suffix under which the package version of a preserved file is staged
/// for manual review.
pub const STAGED_SUFFIX: &str = ".codeforge-new";

/// Suffix under which the prior user version of the container descriptor
/// is saved.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Built-in list of relative paths that never overwrite an existing user
/// copy during update.
pub const DEFAULT_PRESERVE: &[&str] = &[
    "config/defaults/settings.json",
    "config/defaults/main-system-prompt.md",
    "config/defaults/keybindings.json",
    "config/file-manifest.json",
    PRESERVE_FILE,
];
