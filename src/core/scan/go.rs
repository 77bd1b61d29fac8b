use super::{
    ScanSpan, SourceSyntax, SpanKind,
    escape::{push_code_point, read_hex, read_octal},
    scan_comment, scan_quoted, scan_raw,
};
use crate::core::{
    data::{LiteralKind, RawLiteral},
    error::{MalformedLiteral, MalformedReason},
};

/// Go: interpreted strings, rune literals, raw strings and comments.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoSyntax;

impl SourceSyntax for GoSyntax {
    fn scan_at(&self, src: &[u8], pos: usize) -> Option<Result<ScanSpan, MalformedLiteral>> {
        match *src.get(pos)? {
            quote @ (b'"' | b'\'') => Some(
                scan_quoted(src, pos, quote, false)
                    .map(|end| ScanSpan::literal(pos, end, LiteralKind::Simple, quote)),
            ),
            b'`' => Some(scan_raw(src, pos, b'`')),
            b'/' => scan_comment(src, pos),
            _ => None,
        }
    }

    fn decode(&self, src: &str, span: &ScanSpan) -> Result<RawLiteral, MalformedLiteral> {
        let body = span.body(src);
        match span.kind {
            SpanKind::Literal { kind, .. } if kind.is_verbatim() => {
                // Carriage returns are discarded from raw strings
                Ok(RawLiteral::new(kind, body.replace('\r', "")))
            }
            SpanKind::Literal { kind, delimiter } => {
                let text = unescape(body.as_bytes(), delimiter, span.start + 1)?;
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
                c if c.is_ascii_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
                c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
                c => out.push(c),
            }
        }
        out.push('"');
        out
    }

    fn accepts_key(&self, kind: LiteralKind, delimiter: u8) -> bool {
        match delimiter {
            b'"' => true,
            b'`' => kind == LiteralKind::Raw,
            _ => false,
        }
    }

    fn accepts_value(&self, _kind: LiteralKind, delimiter: u8) -> bool {
        matches!(delimiter, b'"' | b'`')
    }

    fn supports_constants(&self) -> bool {
        true
    }
}

/// Resolve Go escape sequences in a string or rune body starting at byte `base`.
///
/// `\x` and octal escapes produce single bytes, so the result is validated as
/// UTF-8 only at the end.
fn unescape(body: &[u8], quote: u8, base: usize) -> Result<String, MalformedLiteral> {
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
            b'a' => out.push(0x07),
            b'b' => out.push(0x08),
            b'f' => out.push(0x0C),
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'v' => out.push(0x0B),
            b'\\' => out.push(b'\\'),
            b'"' | b'\'' if esc == quote => out.push(esc),
            b'x' => {
                let byte = read_hex(body, i, 2).ok_or(invalid)?;
                out.push(byte as u8);
                i += 2;
            }
            b'0'..=b'7' => {
                let (value, count) = read_octal(body, i - 1, 3);
                if count != 3 || value > 0xFF {
                    return Err(invalid);
                }
                out.push(value as u8);
                i += 2;
            }
            b'u' | b'U' => {
                let digits = if esc == b'u' { 4 } else { 8 };
                let code = read_hex(body, i, digits).ok_or(invalid)?;
                push_code_point(&mut out, code, at)?;
                i += digits;
            }
            _ => return Err(invalid),
        }
    }
    String::from_utf8(out).map_err(|_| MalformedLiteral::new(base, MalformedReason::InvalidUtf8))
}
