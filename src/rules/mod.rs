//! Lint rules over extracted translation tables.
//!
//! Each rule is a pure function over an [`ExtractionRun`](crate::core::context::ExtractionRun)
//! returning its specific issue type.
//!
//! ## Module Structure
//!
//! - `helpers`: Shared helpers (full key names, parsed variants)
//! - `template_syntax`: Values that do not follow the placeholder grammar
//! - `placeholder_mismatch`: Translations whose placeholders differ from the default language

pub mod helpers;
pub mod placeholder_mismatch;
pub mod template_syntax;

pub use placeholder_mismatch::check_placeholder_mismatch_issues;
pub use template_syntax::check_template_syntax_issues;
