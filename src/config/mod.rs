// src/config/mod.rs

//! Batch files for the `runseq` binary.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a batch file from disk (`loader.rs`).
//! - Validate it into a runnable [`BatchFile`] (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{DEFAULT_CONFIG, load_and_validate, load_from_path};
pub use model::{BatchFile, CommandEntry, ConfigSection, RawBatchFile, RunMode};
