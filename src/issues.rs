//! Issue types for extraction and lint results.
//!
//! Each issue is self-contained with everything the reporter needs to
//! display it: location, source line, message and notes.

use enum_dispatch::enum_dispatch;

use crate::{
    core::{
        data::{SourceContext, SourceLocation},
        error::{ExtractError, MalformedReason},
    },
    template::TemplateSyntaxError,
};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MalformedLiteral,
    DuplicateKey,
    ConflictingVariant,
    MissingDefaultVariant,
    UnresolvedConstant,
    TemplateSyntax,
    PlaceholderMismatch,
    ReadError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MalformedLiteral => write!(f, "malformed-literal"),
            Rule::DuplicateKey => write!(f, "duplicate-key"),
            Rule::ConflictingVariant => write!(f, "conflicting-variant"),
            Rule::MissingDefaultVariant => write!(f, "missing-default-variant"),
            Rule::UnresolvedConstant => write!(f, "unresolved-constant"),
            Rule::TemplateSyntax => write!(f, "template-syntax"),
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::ReadError => write!(f, "read-error"),
        }
    }
}

// ============================================================
// Issue Types - Extraction
// ============================================================

/// A literal that could not be scanned or decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLiteralIssue {
    pub context: SourceContext,
    pub reason: MalformedReason,
}

impl MalformedLiteralIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MalformedLiteral
    }
}

/// Key declared twice in the same table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyIssue {
    pub context: SourceContext,
    pub key: String,
    /// Where the key was first declared (that declaration is kept).
    pub first: SourceLocation,
}

impl DuplicateKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::DuplicateKey
    }
}

/// The same `key##tag` declared again for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictingVariantIssue {
    pub context: SourceContext,
    pub key: String,
    pub tag: String,
    pub first: SourceLocation,
}

impl ConflictingVariantIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ConflictingVariant
    }
}

/// Base key declared only with tagged variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingDefaultVariantIssue {
    pub context: SourceContext,
    pub key: String,
}

impl MissingDefaultVariantIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingDefaultVariant
    }
}

/// Identifier key naming no string constant of its file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedConstantIssue {
    pub context: SourceContext,
    pub name: String,
}

impl UnresolvedConstantIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnresolvedConstant
    }
}

// ============================================================
// Issue Types - Templates
// ============================================================

/// Extracted value that does not follow the placeholder grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSyntaxIssue {
    pub context: SourceContext,
    /// Full key, including the variant suffix.
    pub key: String,
    pub error: TemplateSyntaxError,
}

impl TemplateSyntaxIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::TemplateSyntax
    }
}

/// Translation whose placeholders differ from the default language's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub context: SourceContext,
    /// Full key, including the variant suffix.
    pub key: String,
    pub language: String,
    pub reference_language: String,
    /// Names used by the reference but not by this translation.
    pub missing: Vec<String>,
    /// Names used by this translation but not by the reference.
    pub unexpected: Vec<String>,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

// ============================================================
// Special Issue Types
// ============================================================

/// Source file could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ReadErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ReadError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found while extracting or linting.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MalformedLiteral(MalformedLiteralIssue),
    DuplicateKey(DuplicateKeyIssue),
    ConflictingVariant(ConflictingVariantIssue),
    MissingDefaultVariant(MissingDefaultVariantIssue),
    UnresolvedConstant(UnresolvedConstantIssue),
    TemplateSyntax(TemplateSyntaxIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    ReadError(ReadErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::MalformedLiteral(_) => MalformedLiteralIssue::severity(),
            Issue::DuplicateKey(_) => DuplicateKeyIssue::severity(),
            Issue::ConflictingVariant(_) => ConflictingVariantIssue::severity(),
            Issue::MissingDefaultVariant(_) => MissingDefaultVariantIssue::severity(),
            Issue::UnresolvedConstant(_) => UnresolvedConstantIssue::severity(),
            Issue::TemplateSyntax(_) => TemplateSyntaxIssue::severity(),
            Issue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::severity(),
            Issue::ReadError(_) => ReadErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::MalformedLiteral(_) => MalformedLiteralIssue::rule(),
            Issue::DuplicateKey(_) => DuplicateKeyIssue::rule(),
            Issue::ConflictingVariant(_) => ConflictingVariantIssue::rule(),
            Issue::MissingDefaultVariant(_) => MissingDefaultVariantIssue::rule(),
            Issue::UnresolvedConstant(_) => UnresolvedConstantIssue::rule(),
            Issue::TemplateSyntax(_) => TemplateSyntaxIssue::rule(),
            Issue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::rule(),
            Issue::ReadError(_) => ReadErrorIssue::rule(),
        }
    }

    /// Convert an extraction error, with `source_line` being the text of the
    /// line the error points at.
    pub fn from_extract_error(err: ExtractError, source_line: impl Into<String>) -> Self {
        let source_line = source_line.into();
        match err {
            ExtractError::MalformedLiteral { location, reason } => {
                Issue::MalformedLiteral(MalformedLiteralIssue {
                    context: SourceContext::new(location, source_line),
                    reason,
                })
            }
            ExtractError::DuplicateKey {
                key,
                location,
                first,
            } => Issue::DuplicateKey(DuplicateKeyIssue {
                context: SourceContext::new(location, source_line),
                key,
                first,
            }),
            ExtractError::ConflictingVariant {
                key,
                tag,
                location,
                first,
            } => Issue::ConflictingVariant(ConflictingVariantIssue {
                context: SourceContext::new(location, source_line),
                key,
                tag,
                first,
            }),
            ExtractError::MissingDefaultVariant { key, location } => {
                Issue::MissingDefaultVariant(MissingDefaultVariantIssue {
                    context: SourceContext::new(location, source_line),
                    key,
                })
            }
            ExtractError::UnresolvedConstant { name, location } => {
                Issue::UnresolvedConstant(UnresolvedConstantIssue {
                    context: SourceContext::new(location, source_line),
                    name,
                })
            }
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (has source_line for context display).
    Source(&'a SourceContext),
    /// File-level only (no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types and dispatched on [`Issue`] through
/// `enum_dispatch`.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key, constant name, error text).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MalformedLiteralIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.reason.to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("the rest of this file was not extracted".to_string())
    }
}

impl Report for DuplicateKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("first declared at {}", self.first))
    }
}

impl Report for ConflictingVariantIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let variant = if self.tag.is_empty() {
            "default variant".to_string()
        } else {
            format!("variant \"{}\"", self.tag)
        };
        Some(format!("{} first declared at {}", variant, self.first))
    }
}

impl Report for MissingDefaultVariantIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("declare the key without a variant suffix")
    }
}

impl Report for UnresolvedConstantIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.name.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("declare the key as a string constant in the same file")
    }
}

impl Report for TemplateSyntaxIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{} (byte {} of the value)",
            self.error.kind, self.error.offset
        ))
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing {}", self.missing.join(", ")));
        }
        if !self.unexpected.is_empty() {
            parts.push(format!("unexpected {}", self.unexpected.join(", ")));
        }
        Some(format!(
            "in {} compared to {}: {}",
            self.language,
            self.reference_language,
            parts.join("; ")
        ))
    }
}

impl Report for ReadErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.file_path(),
            ReportLocation::File { path } => path,
        }
    }

    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.line(),
            ReportLocation::File { .. } => 0,
        }
    }

    fn sort_col(&self) -> usize {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.col(),
            ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_file_path()
            .cmp(other.sort_file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.sort_col().cmp(&other.sort_col()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
