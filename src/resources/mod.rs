//! Filesystem primitives underpinning install, update, and reset.
pub mod fs;
pub mod sync;
