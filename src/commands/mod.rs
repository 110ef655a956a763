//! Top-level mode dispatch: fresh install, selective update, reset.
pub mod install;
pub mod reset;
pub mod update;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::cli::{Cli, Mode};
use crate::config::DEVCONTAINER_DIR;
use crate::error::SetupError;
use crate::logging::Logger;

/// Resolved source and destination roots for one invocation.
///
/// Passed explicitly to the dispatcher so the reconciliation components
/// stay pure functions of their inputs instead of reading the working
/// directory ad hoc.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Bundled `.devcontainer` tree shipped with the package (read-only).
    pub source: PathBuf,
    /// `.devcontainer` tree in the user's project directory.
    pub dest: PathBuf,
}

/// Run the command described by the parsed CLI arguments.
///
/// # Errors
///
/// Returns an error if the package root cannot be resolved, the bundled
/// source tree is missing, or the selected operation fails.
pub fn run(args: &Cli, log: &Logger) -> Result<()> {
    let version = option_env!("CODEFORGE_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    log.debug(&format!("codeforge {version}"));

    let package_root = resolve_package_root(args.root.as_deref())?;
    let paths = Paths {
        source: package_root.join(DEVCONTAINER_DIR),
        dest: std::env::current_dir()?.join(DEVCONTAINER_DIR),
    };
    dispatch(&paths, args.mode(), log)?;

    if let Some(path) = log.log_path() {
        log.debug(&format!("log: {}", path.display()));
    }
    Ok(())
}

/// Choose and run the operation for one invocation.
///
/// State machine per the mode contract: an absent destination is always a
/// fresh install; a present destination requires `--reset` (wipe and
/// reinstall) or `--force` (selective update), and is refused with
/// guidance otherwise. All transitions are terminal after one pass.
///
/// # Errors
///
/// Returns an error if the source tree is missing, source and destination
/// resolve to the same directory, the destination exists without a mode
/// flag, or the selected operation fails part-way.
pub fn dispatch(paths: &Paths, mode: Mode, log: &Logger) -> Result<()> {
    if !paths.source.is_dir() {
        return Err(SetupError::MissingSource {
            path: paths.source.display().to_string(),
        }
        .into());
    }

    if paths.source == paths.dest {
        anyhow::bail!(
            "package source and destination are the same directory: {}",
            paths.dest.display()
        );
    }

    if !paths.dest.exists() {
        return install::run(paths, log);
    }

    match mode {
        Mode::Reset => reset::run(paths, log),
        Mode::ForceUpdate => update::run(paths, log),
        Mode::InstallIfAbsent => {
            log.warn(&format!("{DEVCONTAINER_DIR} directory already exists."));
            log.info("  --force   Update (preserves your config files)");
            log.info("  --reset   Start fresh (removes all customizations)");
            Err(SetupError::DestinationExists.into())
        }
    }
}

/// Resolve the package root directory from CLI arguments or auto-detection.
///
/// Order: `--root` override, `CODEFORGE_ROOT` env var, directories
/// adjacent to the running executable that contain a bundled
/// `.devcontainer`, then the current directory.
///
/// # Errors
///
/// Returns an error if no candidate contains the bundled tree.
fn resolve_package_root(override_root: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = override_root {
        return Ok(root.to_path_buf());
    }

    if let Ok(root) = std::env::var("CODEFORGE_ROOT") {
        return Ok(PathBuf::from(root));
    }

    // Installed layout: the binary sits in bin/ next to the bundled tree,
    // or directly inside the package root.
    if let Ok(exe) = std::env::current_exe()
        && let Some(parent) = exe.parent()
    {
        let candidates = [parent.to_path_buf(), parent.join("..")];
        for candidate in &candidates {
            if candidate.join(DEVCONTAINER_DIR).is_dir() {
                return Ok(std::fs::canonicalize(candidate)?);
            }
        }
    }

    // Last resort: a package checkout in the current directory. The
    // dispatcher rejects the degenerate case where this makes source and
    // destination the same tree.
    let cwd = std::env::current_dir()?;
    if cwd.join(DEVCONTAINER_DIR).is_dir() {
        return Ok(cwd);
    }

    anyhow::bail!("cannot determine package root. Use --root or set CODEFORGE_ROOT env var");
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn resolve_package_root_uses_explicit_root() {
        let root = resolve_package_root(Some(Path::new("/explicit/path"))).unwrap();
        assert_eq!(root, PathBuf::from("/explicit/path"));
    }

    #[test]
    fn resolve_package_root_falls_back_to_current_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(DEVCONTAINER_DIR)).unwrap();

        // Save and restore current directory
        let original_dir = std::env::current_dir().ok();
        std::env::set_current_dir(dir.path()).ok();

        let result = resolve_package_root(None);

        if let Some(d) = original_dir {
            std::env::set_current_dir(d).ok();
        }

        // Only check the fallback when the env override cannot interfere.
        if std::env::var("CODEFORGE_ROOT").is_err() {
            let root = result.unwrap();
            assert_eq!(
                std::fs::canonicalize(&root).unwrap(),
                std::fs::canonicalize(dir.path()).unwrap()
            );
        }
    }

    #[test]
    fn dispatch_rejects_identical_source_and_destination() {
        let dir = tempfile::tempdir().unwrap();
        let tree = dir.path().join(DEVCONTAINER_DIR);
        std::fs::create_dir_all(&tree).unwrap();
        std::fs::write(tree.join("a.txt"), b"pkg").unwrap();
        let log = Logger::new("test");

        let err = dispatch(
            &Paths {
                source: tree.clone(),
                dest: tree.clone(),
            },
            Mode::ForceUpdate,
            &log,
        )
        .unwrap_err();

        assert!(err.to_string().contains("same directory"));
        // The degenerate layout must not be mutated.
        assert_eq!(std::fs::read(tree.join("a.txt")).unwrap(), b"pkg");
    }

    #[test]
    fn dispatch_fails_when_source_missing() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths {
            source: dir.path().join("no-such-tree"),
            dest: dir.path().join(DEVCONTAINER_DIR),
        };
        let log = Logger::new("test");

        let err = dispatch(&paths, Mode::InstallIfAbsent, &log).unwrap_err();
        assert!(err.to_string().contains("package source directory not found"));
    }

    #[test]
    fn dispatch_refuses_existing_destination_without_mode() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("pkg");
        let dest = dir.path().join(DEVCONTAINER_DIR);
        std::fs::create_dir_all(&source).unwrap();
        std::fs::write(source.join("a.txt"), b"pkg").unwrap();
        std::fs::create_dir_all(&dest).unwrap();
        std::fs::write(dest.join("mine.txt"), b"user").unwrap();
        let log = Logger::new("test");

        let err = dispatch(
            &Paths {
                source,
                dest: dest.clone(),
            },
            Mode::InstallIfAbsent,
            &log,
        )
        .unwrap_err();

        assert!(err.to_string().contains("--force"));
        // Refusal must not mutate the destination.
        assert_eq!(std::fs::read(dest.join("mine.txt")).unwrap(), b"user");
        assert!(!dest.join("a.txt").exists());
    }
}
