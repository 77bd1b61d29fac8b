//! Translator comment association.
//!
//! A declaration takes the block of comments directly above it (no blank line
//! or code in between) plus comments trailing its value on the same line.

use super::tokens::Token;
use crate::core::data::LineIndex;

/// Line on which a token ends.
fn end_line(lines: &LineIndex, token: &Token) -> usize {
    lines.line(token.end.saturating_sub(1).max(token.start))
}

/// Whether a non-comment token ends on the line where `tokens[idx]` starts.
fn trails_code(tokens: &[Token], idx: usize, lines: &LineIndex) -> bool {
    let line = lines.line(tokens[idx].start);
    tokens[..idx]
        .iter()
        .rev()
        .take_while(|t| end_line(lines, t) == line)
        .any(|t| !t.is_comment())
}

/// Comment tokens directly above `tokens[key]`, in source order.
pub fn leading(tokens: &[Token], key: usize, lines: &LineIndex) -> Vec<Token> {
    let mut found = Vec::new();
    let mut line = lines.line(tokens[key].start);
    let mut idx = key;

    while idx > 0 {
        idx -= 1;
        let token = tokens[idx];
        if !token.is_comment() {
            break;
        }
        let ends = end_line(lines, &token);
        if ends + 1 != line && ends != line {
            break;
        }
        if trails_code(tokens, idx, lines) {
            break;
        }
        found.push(token);
        line = lines.line(token.start);
    }

    found.reverse();
    found
}

/// Comment tokens on the same line after `tokens[value]`, skipping one `,`.
pub fn trailing(tokens: &[Token], value: usize, lines: &LineIndex) -> Vec<Token> {
    let line = end_line(lines, &tokens[value]);
    let mut idx = value + 1;
    if tokens.get(idx).is_some_and(|t| t.is_punct(b',')) {
        idx += 1;
    }

    tokens
        .get(idx..)
        .unwrap_or_default()
        .iter()
        .take_while(|t| t.is_comment() && lines.line(t.start) == line)
        .copied()
        .collect()
}

/// Strip comment markers and surrounding whitespace from one comment.
pub fn normalize(text: &str) -> String {
    if let Some(line) = text.strip_prefix("//") {
        return line.trim().to_string();
    }

    let body = text.strip_prefix("/*").unwrap_or(text);
    let body = body.strip_suffix("*/").unwrap_or(body);
    let lines: Vec<&str> = body
        .lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix('*').map_or(line, str::trim_start)
        })
        .collect();

    let first = lines.iter().position(|l| !l.is_empty());
    let last = lines.iter().rposition(|l| !l.is_empty());
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].join("\n"),
        _ => String::new(),
    }
}

/// Join the normalized text of comments, dropping empty ones.
pub fn join(src: &str, comments: &[Token]) -> Option<String> {
    let parts: Vec<String> = comments
        .iter()
        .map(|t| normalize(t.text(src)))
        .filter(|text| !text.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join("\n"))
}
