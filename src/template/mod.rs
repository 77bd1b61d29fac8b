//! Template runtime: parsing and evaluation of placeholder markup.
//!
//! Templates are plain strings such as
//! `{X_PLURAL:{X} file|{X} files} in {FOLDER}`. They are parsed into a
//! [`TemplateNode`] tree once and evaluated against [`Bindings`].
//!
//! ## Module Structure
//!
//! - `ast`: TemplateNode tree and its markup printer
//! - `error`: Syntax and evaluation errors
//! - `eval`: Evaluator
//! - `parser`: Recursive-descent parser
//! - `plural`: Plural rules and per-language registry
//! - `value`: Bound values

pub mod ast;
pub mod error;
pub mod eval;
pub mod parser;
pub mod plural;
pub mod value;

pub use ast::{PLURAL_SUFFIX, TemplateNode};
pub use error::{EvalError, SyntaxErrorKind, TemplateSyntaxError};
pub use eval::{Evaluator, evaluate};
pub use parser::parse;
pub use plural::{PluralCategory, PluralRule, PluralRules};
pub use value::{Bindings, Value};
