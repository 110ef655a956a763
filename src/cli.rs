//! Argument surface and mode selection.
use clap::Parser;

/// Top-level CLI entry point for the CodeForge setup tool.
#[derive(Parser, Debug)]
#[command(
    name = "codeforge",
    about = "CodeForge DevContainer setup and update engine",
    version,
    after_help = "Without flags, installs only if .devcontainer does not exist."
)]
pub struct Cli {
    /// Update an existing .devcontainer (preserves user config)
    #[arg(short, long)]
    pub force: bool,

    /// Remove all customizations and install fresh defaults
    #[arg(long)]
    pub reset: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the package root directory containing the bundled .devcontainer
    #[arg(long)]
    pub root: Option<std::path::PathBuf>,
}

/// Operation requested for one invocation.
///
/// Derived from the mode flags; `--reset` takes precedence over `--force`.
/// The flags only disambiguate when the destination already exists — an
/// absent destination is always a fresh install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No mode flag: install only when the destination is absent.
    InstallIfAbsent,
    /// `--force`: selective update preserving user customizations.
    ForceUpdate,
    /// `--reset`: wipe the destination and reinstall package defaults.
    Reset,
}

impl Mode {
    /// Derive the mode from the two flags.
    #[must_use]
    pub const fn from_flags(force: bool, reset: bool) -> Self {
        if reset {
            Self::Reset
        } else if force {
            Self::ForceUpdate
        } else {
            Self::InstallIfAbsent
        }
    }
}

impl Cli {
    /// The operation mode requested by the parsed flags.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        Mode::from_flags(self.force, self.reset)
    }
}
