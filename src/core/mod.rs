//! Source literal extraction.
//!
//! Bytes of a source file flow through three stages:
//!
//! 1. `scan`: literal and comment spans per host language
//! 2. `extract`: `key: "value"` declarations with their comments
//! 3. `variants`: `key##tag` declarations grouped into entries
//!
//! The stages are pure; `context` and `file_scanner` add the filesystem
//! walk used by the CLI.
//!
//! ## Module Structure
//!
//! - `context`: ProjectContext and ExtractionRun (whole-tree extraction)
//! - `data`: Entries, literals and locations
//! - `error`: Scanning and extraction errors
//! - `extract`: Literal-to-entry extractor
//! - `file_scanner`: Source file discovery
//! - `scan`: Lexical scanners for Go and JavaScript
//! - `variants`: Key variant resolver

pub mod context;
pub mod data;
pub mod error;
pub mod extract;
pub mod file_scanner;
pub mod scan;
pub mod variants;

pub use context::{ExtractionRun, ProjectContext};
pub use data::{DEFAULT_VARIANT, SourceLocation, TranslationEntry};
pub use error::{ExtractError, MalformedLiteral, MalformedReason};
pub use extract::{FileExtraction, extract};
pub use scan::SourceLanguage;
pub use variants::{DEFAULT_SEPARATOR, resolve};
