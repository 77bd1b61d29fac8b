//! Coarse tokenization of source code around scanned literals.
//!
//! The extractor only needs to see declaration punctuation, so code between
//! literal and comment spans is split into identifier runs and single
//! punctuation bytes. Whitespace is dropped.

use crate::core::{
    data::LiteralKind,
    error::MalformedLiteral,
    scan::{ScanSpan, SpanKind, Spans, Syntax},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Literal { kind: LiteralKind, delimiter: u8 },
    Comment,
    Ident,
    Punct(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn is_comment(&self) -> bool {
        self.kind == TokenKind::Comment
    }

    pub fn is_punct(&self, byte: u8) -> bool {
        self.kind == TokenKind::Punct(byte)
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.kind, TokenKind::Literal { .. })
    }

    pub fn text<'a>(&self, src: &'a str) -> &'a str {
        src.get(self.start..self.end).unwrap_or_default()
    }

    /// The scanner span of a literal token, for decoding.
    pub fn literal_span(&self) -> Option<ScanSpan> {
        match self.kind {
            TokenKind::Literal { kind, delimiter } => {
                Some(ScanSpan::literal(self.start, self.end, kind, delimiter))
            }
            _ => None,
        }
    }
}

impl From<ScanSpan> for Token {
    fn from(span: ScanSpan) -> Self {
        let kind = match span.kind {
            SpanKind::Literal { kind, delimiter } => TokenKind::Literal { kind, delimiter },
            SpanKind::LineComment | SpanKind::BlockComment => TokenKind::Comment,
        };
        Self {
            kind,
            start: span.start,
            end: span.end,
        }
    }
}

/// Tokenize `src`, failing on the first malformed literal or comment.
pub fn tokenize(src: &str, syntax: Syntax) -> Result<Vec<Token>, MalformedLiteral> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    for span in Spans::new(syntax, src) {
        let span = span?;
        lex_code(src.as_bytes(), pos, span.start, &mut tokens);
        tokens.push(span.into());
        pos = span.end;
    }
    lex_code(src.as_bytes(), pos, src.len(), &mut tokens);
    Ok(tokens)
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || !b.is_ascii()
}

fn lex_code(src: &[u8], start: usize, end: usize, tokens: &mut Vec<Token>) {
    let mut i = start;
    while i < end {
        let b = src[i];
        if b.is_ascii_whitespace() {
            i += 1;
        } else if is_ident_byte(b) {
            let len = src[i..end]
                .iter()
                .position(|&b| !is_ident_byte(b))
                .unwrap_or(end - i);
            tokens.push(Token {
                kind: TokenKind::Ident,
                start: i,
                end: i + len,
            });
            i += len;
        } else {
            tokens.push(Token {
                kind: TokenKind::Punct(b),
                start: i,
                end: i + 1,
            });
            i += 1;
        }
    }
}
