//! Dehint - return-type annotation stripper for Python codebases
//!
//! Dehint is a CLI tool and library for removing function return-type
//! annotations (`-> SomeType`) from Python source files in place. It scans a
//! directory for `.py` files, optionally recursing into subdirectories, and
//! rewrites each match. Parameter annotations and all other content are left
//! untouched.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `report`: Status output formatting
//! - `rules`: Text transform rules applied to file contents
//! - `scanner`: Directory traversal and candidate file selection
//! - `stripper`: Per-file read/transform/write pipeline

pub mod cli;
pub mod config;
pub mod report;
pub mod rules;
pub mod scanner;
pub mod stripper;
