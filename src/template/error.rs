use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    #[error("unmatched `{{`")]
    UnmatchedOpenBrace,
    #[error("unmatched `}}`")]
    UnmatchedCloseBrace,
    #[error("`|` outside of a placeholder")]
    StrayPipe,
    #[error("empty placeholder name")]
    EmptyName,
    #[error("invalid character {0:?} in placeholder name")]
    InvalidNameChar(char),
    #[error("plural placeholder has no name before `_PLURAL`")]
    EmptyPluralName,
}

/// A template string that does not follow the placeholder grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at byte {offset}")]
pub struct TemplateSyntaxError {
    /// Byte offset in the template.
    pub offset: usize,
    pub kind: SyntaxErrorKind,
}

impl TemplateSyntaxError {
    pub fn new(offset: usize, kind: SyntaxErrorKind) -> Self {
        Self { offset, kind }
    }
}

/// Failure to evaluate a parsed template against bindings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("no value bound to `{name}`")]
    UnboundName { name: String },

    #[error("`{name}` must be bound to a number")]
    TypeMismatch { name: String },

    #[error("index {index} of `{name}` is out of range for {len} alternatives")]
    IndexOutOfRange { name: String, index: i64, len: usize },
}
