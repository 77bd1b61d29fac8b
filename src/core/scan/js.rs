use super::{
    ScanSpan, SourceSyntax, SpanKind,
    escape::{is_high_surrogate, is_low_surrogate, push_code_point, read_hex, read_octal},
    scan_comment, scan_quoted,
};
use crate::core::{
    data::{LiteralKind, RawLiteral},
    error::{MalformedLiteral, MalformedReason},
};

const LINE_SEPARATOR: &[u8] = "\u{2028}".as_bytes();
const PARAGRAPH_SEPARATOR: &[u8] = "\u{2029}".as_bytes();

/// JavaScript: single and double quoted strings, template literals and comments.
///
/// Regular expression literals are not recognized.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsSyntax;

impl JsSyntax {
    fn scan_template(&self, src: &[u8], pos: usize) -> Result<ScanSpan, MalformedLiteral> {
        let unterminated = MalformedLiteral::new(pos, MalformedReason::UnterminatedTemplate);
        let mut i = pos + 1;
        while let Some(&b) = src.get(i) {
            match b {
                b'`' => {
                    let body = &src[pos + 1..i];
                    return Ok(ScanSpan::literal(
                        pos,
                        i + 1,
                        LiteralKind::raw_for(body),
                        b'`',
                    ));
                }
                b'\\' => i += 2,
                b'$' if src.get(i + 1) == Some(&b'{') => {
                    i = self.skip_substitution(src, i + 2, pos)?;
                }
                _ => i += 1,
            }
        }
        Err(unterminated)
    }

    /// Skip a `${ ... }` expression body; returns the offset after its closing brace.
    ///
    /// Nested literals and comments are scanned so braces inside them do not
    /// count. Running out of input is reported at the enclosing template's start.
    fn skip_substitution(
        &self,
        src: &[u8],
        start: usize,
        template: usize,
    ) -> Result<usize, MalformedLiteral> {
        let mut depth = 1usize;
        let mut i = start;
        while let Some(&b) = src.get(i) {
            match b {
                b'{' => {
                    depth += 1;
                    i += 1;
                }
                b'}' => {
                    depth -= 1;
                    i += 1;
                    if depth == 0 {
                        return Ok(i);
                    }
                }
                _ => match self.scan_at(src, i) {
                    Some(Ok(span)) => i = span.end,
                    Some(Err(err)) => return Err(err),
                    None => i += 1,
                },
            }
        }
        Err(MalformedLiteral::new(
            template,
            MalformedReason::UnterminatedTemplate,
        ))
    }
}

impl SourceSyntax for JsSyntax {
    fn scan_at(&self, src: &[u8], pos: usize) -> Option<Result<ScanSpan, MalformedLiteral>> {
        match *src.get(pos)? {
            quote @ (b'"' | b'\'') => Some(
                scan_quoted(src, pos, quote, true)
                    .map(|end| ScanSpan::literal(pos, end, LiteralKind::Simple, quote)),
            ),
            b'`' => Some(self.scan_template(src, pos)),
            b'/' => scan_comment(src, pos),
            _ => None,
        }
    }

    fn decode(&self, src: &str, span: &ScanSpan) -> Result<RawLiteral, MalformedLiteral> {
        let body = span.body(src);
        match span.kind {
            SpanKind::Literal { kind, .. } if kind.is_verbatim() => Ok(RawLiteral::new(kind, body)),
            SpanKind::Literal { kind, .. } => {
                let text = unescape(body.as_bytes(), span.start + 1)?;
                Ok(RawLiteral::new(kind, text))
            }
            SpanKind::LineComment | SpanKind::BlockComment => {
                Ok(RawLiteral::new(LiteralKind::Raw, span.text(src)))
            }
        }
    }

    fn encode(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 2);
        out.push('"');
        for c in text.chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                '\u{8}' => out.push_str("\\b"),
                '\u{b}' => out.push_str("\\v"),
                '\u{c}' => out.push_str("\\f"),
                '\u{2028}' => out.push_str("\\u2028"),
                '\u{2029}' => out.push_str("\\u2029"),
                c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
                c => out.push(c),
            }
        }
        out.push('"');
        out
    }

    fn accepts_key(&self, kind: LiteralKind, delimiter: u8) -> bool {
        kind == LiteralKind::Simple && delimiter == b'"'
    }

    fn accepts_value(&self, kind: LiteralKind, delimiter: u8) -> bool {
        kind == LiteralKind::Simple && delimiter == b'"'
    }
}

/// Resolve JavaScript escape sequences in a string body starting at byte `base`.
fn unescape(body: &[u8], base: usize) -> Result<String, MalformedLiteral> {
    let mut out = Vec::with_capacity(body.len());
    let mut i = 0;
    while let Some(&b) = body.get(i) {
        if b != b'\\' {
            out.push(b);
            i += 1;
            continue;
        }

        let at = base + i;
        let invalid = MalformedLiteral::new(at, MalformedReason::InvalidEscape);
        let esc = *body.get(i + 1).ok_or(invalid)?;
        i += 2;
        match esc {
            b'b' => out.push(0x08),
            b'f' => out.push(0x0C),
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'v' => out.push(0x0B),
            b'\\' | b'"' | b'\'' => out.push(esc),
            b'0' if !body.get(i).is_some_and(u8::is_ascii_digit) => out.push(0),
            b'0'..=b'7' => {
                // Legacy octal: three digits only when the first is 0-3
                let max = if esc <= b'3' { 3 } else { 2 };
                let (value, count) = read_octal(body, i - 1, max);
                push_code_point(&mut out, value, at)?;
                i += count - 1;
            }
            b'x' => {
                let code = read_hex(body, i, 2).ok_or(invalid)?;
                push_code_point(&mut out, code, at)?;
                i += 2;
            }
            b'u' => {
                let (mut code, next) = read_unicode(body, i).ok_or(invalid)?;
                i = next;
                if is_high_surrogate(code)
                    && body.get(i..).is_some_and(|rest| rest.starts_with(b"\\u"))
                    && let Some((low, after)) = read_unicode(body, i + 2)
                    && is_low_surrogate(low)
                {
                    code = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                    i = after;
                }
                push_code_point(&mut out, code, at)?;
            }
            b'\n' => {}
            b'\r' => {
                if body.get(i) == Some(&b'\n') {
                    i += 1;
                }
            }
            _ if body[i - 1..].starts_with(LINE_SEPARATOR)
                || body[i - 1..].starts_with(PARAGRAPH_SEPARATOR) =>
            {
                i += LINE_SEPARATOR.len() - 1;
            }
            // Identity escape: drop the backslash and copy the character as is
            _ => i -= 1,
        }
    }
    String::from_utf8(out).map_err(|_| MalformedLiteral::new(base, MalformedReason::InvalidUtf8))
}

/// Read the digits of a `\u` escape at `at` (just after the `u`).
///
/// Accepts `HHHH` and `{H...}`; returns the code point and the offset after it.
fn read_unicode(body: &[u8], at: usize) -> Option<(u32, usize)> {
    if body.get(at) != Some(&b'{') {
        return read_hex(body, at, 4).map(|code| (code, at + 4));
    }
    let digits = body.get(at + 1..)?.iter().position(|&b| b == b'}')?;
    if digits == 0 {
        return None;
    }
    let code = read_hex(body, at + 1, digits)?;
    (code <= 0x10FFFF).then_some((code, at + 1 + digits + 1))
}
