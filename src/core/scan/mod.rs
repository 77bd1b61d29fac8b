//! Lexical scanners for the supported host languages.
//!
//! A scanner only finds string literals and comments; everything else in the
//! source is skipped. Each language implements [`SourceSyntax`], and the
//! [`Syntax`] enum dispatches to the right one.
//!
//! ## Module Structure
//!
//! - `escape`: Helpers shared by the escape decoders
//! - `go`: Go strings, runes, raw strings and comments
//! - `js`: JavaScript strings, template literals and comments

mod escape;
pub mod go;
pub mod js;

use std::{fmt, iter::FusedIterator, path::Path};

use enum_dispatch::enum_dispatch;
use serde::Serialize;

pub use go::GoSyntax;
pub use js::JsSyntax;

use crate::core::{
    data::{LiteralKind, RawLiteral},
    error::{MalformedLiteral, MalformedReason},
};

/// What a scanned span contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Literal { kind: LiteralKind, delimiter: u8 },
    LineComment,
    BlockComment,
}

/// A literal or comment found in source, as a byte range including delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSpan {
    pub start: usize,
    pub end: usize,
    pub kind: SpanKind,
}

impl ScanSpan {
    pub fn literal(start: usize, end: usize, kind: LiteralKind, delimiter: u8) -> Self {
        Self {
            start,
            end,
            kind: SpanKind::Literal { kind, delimiter },
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.kind, SpanKind::LineComment | SpanKind::BlockComment)
    }

    pub fn text<'a>(&self, src: &'a str) -> &'a str {
        src.get(self.start..self.end).unwrap_or_default()
    }

    /// Literal body without its delimiters. Empty for comments.
    pub fn body<'a>(&self, src: &'a str) -> &'a str {
        match self.kind {
            SpanKind::Literal { .. } if self.end >= self.start + 2 => {
                src.get(self.start + 1..self.end - 1).unwrap_or_default()
            }
            _ => "",
        }
    }
}

/// Lexical rules of one host language.
#[enum_dispatch]
pub trait SourceSyntax {
    /// Scan the literal or comment starting at `pos`, if one starts there.
    fn scan_at(&self, src: &[u8], pos: usize) -> Option<Result<ScanSpan, MalformedLiteral>>;

    /// Decode a literal span into its runtime text.
    fn decode(&self, src: &str, span: &ScanSpan) -> Result<RawLiteral, MalformedLiteral>;

    /// Render text as a simple literal, quotes included, that decodes back to `text`.
    fn encode(&self, text: &str) -> String;

    /// Whether a literal of this form may be used as a declaration key.
    fn accepts_key(&self, kind: LiteralKind, delimiter: u8) -> bool;

    /// Whether a literal of this form may be used as a declaration value.
    fn accepts_value(&self, kind: LiteralKind, delimiter: u8) -> bool;

    /// Whether identifiers in key position may name string constants.
    fn supports_constants(&self) -> bool {
        false
    }
}

#[enum_dispatch(SourceSyntax)]
#[derive(Debug, Clone, Copy)]
pub enum Syntax {
    Go(GoSyntax),
    Js(JsSyntax),
}

/// Host language of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceLanguage {
    Go,
    Js,
}

impl SourceLanguage {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "go" | "golang" => Some(SourceLanguage::Go),
            "js" | "javascript" | "mjs" | "cjs" => Some(SourceLanguage::Js),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_tag)
    }

    pub fn syntax(self) -> Syntax {
        match self {
            SourceLanguage::Go => GoSyntax.into(),
            SourceLanguage::Js => JsSyntax.into(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SourceLanguage::Go => "go",
            SourceLanguage::Js => "js",
        }
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lazy iterator over the literal and comment spans of a source, in order.
///
/// A clone continues from the position it was taken at; keep a fresh clone
/// around to rescan from the start. Iteration stops after the first error.
#[derive(Debug, Clone)]
pub struct Spans<'a> {
    syntax: Syntax,
    src: &'a [u8],
    pos: usize,
    done: bool,
}

impl<'a> Spans<'a> {
    pub fn new(syntax: Syntax, src: &'a str) -> Self {
        Self {
            syntax,
            src: src.as_bytes(),
            pos: 0,
            done: false,
        }
    }
}

impl Iterator for Spans<'_> {
    type Item = Result<ScanSpan, MalformedLiteral>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        while self.pos < self.src.len() {
            match self.syntax.scan_at(self.src, self.pos) {
                None => self.pos += 1,
                Some(Ok(span)) => {
                    self.pos = span.end;
                    return Some(Ok(span));
                }
                Some(Err(err)) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
        self.done = true;
        None
    }
}

impl FusedIterator for Spans<'_> {}

/// Scan `src` as source code of `language`.
pub fn scan(language: SourceLanguage, src: &str) -> Spans<'_> {
    Spans::new(language.syntax(), src)
}

// ============================================================
// Shared lexing helpers
// ============================================================

/// Scan a quoted literal starting at `pos`; returns the offset after the closing quote.
///
/// With `line_continuation`, a backslash may escape a line break.
pub(crate) fn scan_quoted(
    src: &[u8],
    pos: usize,
    quote: u8,
    line_continuation: bool,
) -> Result<usize, MalformedLiteral> {
    let mut i = pos + 1;
    while let Some(&b) = src.get(i) {
        match b {
            b'\\' => match src.get(i + 1) {
                Some(b'\n') if !line_continuation => {
                    return Err(MalformedLiteral::new(pos, MalformedReason::NewlineInString));
                }
                Some(b'\r') if line_continuation && src.get(i + 2) == Some(&b'\n') => i += 3,
                _ => i += 2,
            },
            b'\n' => return Err(MalformedLiteral::new(pos, MalformedReason::NewlineInString)),
            _ if b == quote => return Ok(i + 1),
            _ => i += 1,
        }
    }
    Err(MalformedLiteral::new(
        pos,
        MalformedReason::UnterminatedString,
    ))
}

/// Scan a raw literal (no escapes) starting at `pos`.
pub(crate) fn scan_raw(src: &[u8], pos: usize, delimiter: u8) -> Result<ScanSpan, MalformedLiteral> {
    let body_start = pos + 1;
    let close = src
        .get(body_start..)
        .and_then(|rest| rest.iter().position(|&b| b == delimiter))
        .ok_or(MalformedLiteral::new(
            pos,
            MalformedReason::UnterminatedRawString,
        ))?;
    let body = &src[body_start..body_start + close];
    Ok(ScanSpan::literal(
        pos,
        body_start + close + 1,
        LiteralKind::raw_for(body),
        delimiter,
    ))
}

/// Scan a `//` or `/* */` comment starting at `pos`.
pub(crate) fn scan_comment(src: &[u8], pos: usize) -> Option<Result<ScanSpan, MalformedLiteral>> {
    match src.get(pos..pos + 2)? {
        b"//" => {
            let end = src[pos..]
                .iter()
                .position(|&b| b == b'\n')
                .map_or(src.len(), |n| pos + n);
            Some(Ok(ScanSpan {
                start: pos,
                end,
                kind: SpanKind::LineComment,
            }))
        }
        b"/*" => {
            let close = src[pos + 2..].windows(2).position(|w| w == b"*/");
            Some(
                close
                    .map(|n| ScanSpan {
                        start: pos,
                        end: pos + 2 + n + 2,
                        kind: SpanKind::BlockComment,
                    })
                    .ok_or(MalformedLiteral::new(
                        pos,
                        MalformedReason::UnterminatedComment,
                    )),
            )
        }
        _ => None,
    }
}
