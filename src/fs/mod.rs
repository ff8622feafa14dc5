//! Filesystem utilities for taskdoc.
//!
//! Atomic writes for generated documents and Markdown discovery for the
//! context injector.

pub mod atomic;
mod walk;

pub use atomic::{atomic_write, atomic_write_file};
pub use walk::markdown_files;
