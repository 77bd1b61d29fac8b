//! Core data types shared by the scanner, extractor and resolver.
//!
//! ## Module Structure
//!
//! - `entry`: TranslationEntry (resolved key with its variants)
//! - `literal`: LiteralKind and RawLiteral (decoded string literals)
//! - `location`: SourceLocation, SourceContext and LineIndex

pub mod entry;
pub mod literal;
pub mod location;

pub use entry::{DEFAULT_VARIANT, TranslationEntry};
pub use literal::{LiteralKind, RawLiteral};
pub use location::{LineIndex, SourceContext, SourceLocation};
