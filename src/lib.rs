//! locstr - localization string extraction and template rendering
//!
//! locstr extracts translatable string literals (keys, translator comments,
//! `key##variant` suffixes) from Go and JavaScript sources, and renders the
//! placeholder templates those strings carry: named values, plural forms
//! and indexed alternatives.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanning, extraction and variant resolution
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Lint rules over extracted tables
//! - `runtime`: Translation catalog and rendering
//! - `template`: Placeholder grammar parser and evaluator

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
pub mod runtime;
pub mod template;
