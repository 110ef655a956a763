//! CodeForge DevContainer setup engine.
//!
//! Installs the package-bundled `.devcontainer` tree into the current
//! project directory and keeps it up to date without clobbering user
//! customizations. Three modes: fresh install (destination absent),
//! selective update (`--force`, preserves configured files and stages the
//! package version as a `.codeforge-new` side-car), and destructive reset
//! (`--reset`).
//!
//! The public API is organised into four layers:
//!
//! - **[`cli`]** — argument surface and mode selection
//! - **[`config`]** — policy constants and the preserve-set loader
//! - **[`resources`]** — filesystem primitives and the tree reconciler
//! - **[`commands`]** — top-level mode dispatch (`install`, `update`, `reset`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod resources;
