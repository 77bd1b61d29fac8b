use std::collections::HashMap;

use super::tokens::{Token, TokenKind};
use crate::core::{
    data::LineIndex,
    scan::{SourceSyntax, Syntax},
};

/// Collect package-level string constants: `const NAME [type] = "literal"`,
/// including specs inside `const ( ... )` groups.
///
/// Constants whose value is not a single decodable literal are ignored.
pub fn collect_constants(
    src: &str,
    tokens: &[Token],
    syntax: Syntax,
    lines: &LineIndex,
) -> HashMap<String, String> {
    let sig: Vec<&Token> = tokens.iter().filter(|t| !t.is_comment()).collect();
    let mut constants = HashMap::new();
    let mut depth = 0usize;
    let mut i = 0;

    while let Some(token) = sig.get(i) {
        match token.kind {
            TokenKind::Punct(b'{') => depth += 1,
            TokenKind::Punct(b'}') => depth = depth.saturating_sub(1),
            TokenKind::Ident if depth == 0 && token.text(src) == "const" => {
                if sig.get(i + 1).is_some_and(|t| t.is_punct(b'(')) {
                    let mut j = i + 2;
                    while let Some(spec) = sig.get(j) {
                        if spec.is_punct(b')') {
                            break;
                        }
                        let prev = sig[j - 1];
                        let starts_spec = prev.is_punct(b'(')
                            || prev.is_punct(b';')
                            || lines.line(prev.start) != lines.line(spec.start);
                        if starts_spec
                            && let Some((name, value)) = parse_spec(src, &sig[j..], syntax)
                        {
                            constants.insert(name, value);
                        }
                        j += 1;
                    }
                    i = j;
                } else if let Some((name, value)) = parse_spec(src, &sig[i + 1..], syntax) {
                    constants.insert(name, value);
                }
            }
            _ => {}
        }
        i += 1;
    }

    constants
}

fn parse_spec(src: &str, tokens: &[&Token], syntax: Syntax) -> Option<(String, String)> {
    let [name, rest @ ..] = tokens else {
        return None;
    };
    if name.kind != TokenKind::Ident {
        return None;
    }
    // Optional type, e.g. `const key string = "..."`
    let rest = match rest.first() {
        Some(ty) if ty.kind == TokenKind::Ident => &rest[1..],
        _ => rest,
    };
    let [eq, literal, tail @ ..] = rest else {
        return None;
    };
    if !eq.is_punct(b'=') || tail.first().is_some_and(|t| t.is_punct(b'+')) {
        return None;
    }
    let span = literal.literal_span()?;
    let value = syntax.decode(src, &span).ok()?;
    Some((name.text(src).to_string(), value.decoded_text))
}
