//! basekit core library.
//!
//! This crate exposes programmatic APIs for scaffolding Base components and
//! validating component definitions against the library conventions.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `error`: Error type and exit-code mapping.
//! - `generate`: Component/test/story scaffolding with collision guard.
//! - `templates`: Fixed artifact templates and token substitution.
//! - `validate`: Rule-table evaluation over component files.
//! - `models`: Rule table, generation options, and report structs.
//! - `output`: Human/JSON printers for generate/validate.
//! - `utils`: Diagnostic prefixes and path helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod models;
pub mod output;
pub mod templates;
pub mod utils;
pub mod validate;
