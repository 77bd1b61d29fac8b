//! Runtime rendering against loaded translation tables.

pub mod catalog;

pub use catalog::{Catalog, LanguageTable, RenderError, render_template};
