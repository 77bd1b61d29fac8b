//! Error types produced by scanning, extraction and variant resolution.

use thiserror::Error;

use crate::core::data::SourceLocation;

/// Why a literal or comment could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated raw string literal")]
    UnterminatedRawString,
    #[error("unterminated template literal")]
    UnterminatedTemplate,
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("newline in string literal")]
    NewlineInString,
    #[error("invalid escape sequence")]
    InvalidEscape,
    #[error("escape sequences produce invalid UTF-8")]
    InvalidUtf8,
    #[error("unpaired surrogate in unicode escape")]
    LoneSurrogate,
}

/// A literal or comment that could not be scanned or decoded.
///
/// `offset` is the byte offset in the scanned source: the start of the span
/// for scanning errors, the offending escape for decoding errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{reason} at byte {offset}")]
pub struct MalformedLiteral {
    pub offset: usize,
    pub reason: MalformedReason,
}

impl MalformedLiteral {
    pub fn new(offset: usize, reason: MalformedReason) -> Self {
        Self { offset, reason }
    }
}

/// Errors reported while turning source files into translation entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("{location}: {reason}")]
    MalformedLiteral {
        location: SourceLocation,
        reason: MalformedReason,
    },

    #[error("{location}: duplicate key \"{key}\" (first declared at {first})")]
    DuplicateKey {
        key: String,
        location: SourceLocation,
        first: SourceLocation,
    },

    #[error(
        "{location}: variant \"{tag}\" of key \"{key}\" is already declared (first declared at {first})"
    )]
    ConflictingVariant {
        key: String,
        tag: String,
        location: SourceLocation,
        first: SourceLocation,
    },

    #[error("{location}: key \"{key}\" has variants but no default variant")]
    MissingDefaultVariant { key: String, location: SourceLocation },

    #[error("{location}: key constant `{name}` is not declared in this file")]
    UnresolvedConstant {
        name: String,
        location: SourceLocation,
    },
}

impl ExtractError {
    pub fn location(&self) -> &SourceLocation {
        match self {
            ExtractError::MalformedLiteral { location, .. }
            | ExtractError::DuplicateKey { location, .. }
            | ExtractError::ConflictingVariant { location, .. }
            | ExtractError::MissingDefaultVariant { location, .. }
            | ExtractError::UnresolvedConstant { location, .. } => location,
        }
    }
}
