use serde::Serialize;

/// Syntactic form of a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralKind {
    /// Quoted string with escape sequences: `"value"`.
    Simple,
    /// Single-line raw string: `` `value` ``.
    Raw,
    /// Raw string spanning several lines.
    Multiline,
}

impl LiteralKind {
    /// Raw and multi-line literals are taken verbatim, without escape processing.
    pub fn is_verbatim(self) -> bool {
        !matches!(self, LiteralKind::Simple)
    }

    /// Kind of a raw literal with the given body.
    pub(crate) fn raw_for(body: &[u8]) -> Self {
        if body.contains(&b'\n') {
            LiteralKind::Multiline
        } else {
            LiteralKind::Raw
        }
    }
}

/// A literal after decoding.
///
/// `decoded_text` has every escape resolved for [`LiteralKind::Simple`] and is
/// the verbatim body (delimiters stripped) for the raw kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLiteral {
    pub kind: LiteralKind,
    pub decoded_text: String,
}

impl RawLiteral {
    pub fn new(kind: LiteralKind, decoded_text: impl Into<String>) -> Self {
        Self {
            kind,
            decoded_text: decoded_text.into(),
        }
    }
}
