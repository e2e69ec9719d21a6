//! tsling - Qt Linguist translation catalog toolkit
//!
//! tsling reads Qt Linguist `.ts` catalogs, answers translation lookups with
//! source-text fallback and numerus form selection, validates catalogs for
//! common translation mistakes, and rewrites them in canonical form.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and report output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog model, reader, writer, plural rules and lookup
//! - `issues`: Issue type definitions and reporting
//! - `logging`: Diagnostic logging setup
//! - `rules`: Validation rules for catalogs
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod logging;
pub mod rules;
pub mod utils;
