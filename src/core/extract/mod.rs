//! Literal-to-entry extraction.
//!
//! Finds `key: "value"` declarations inside `{ ... }` tables of a source file,
//! decodes their literals and attaches translator comments. The result keeps
//! every declaration in document order; grouping `key##variant` declarations
//! into entries is done by [`crate::core::variants`].
//!
//! ## Module Structure
//!
//! - `comments`: Leading and trailing comment association
//! - `constants`: Go package-level string constants usable as keys
//! - `tokens`: Identifier and punctuation tokens between literals

pub mod comments;
pub mod constants;
pub mod tokens;

use std::collections::{BTreeMap, HashMap};

use tokens::{Token, TokenKind, tokenize};

use crate::core::{
    data::{LineIndex, RawLiteral, SourceLocation, TranslationEntry},
    error::{ExtractError, MalformedLiteral},
    scan::{SourceLanguage, SourceSyntax, Syntax},
    variants,
};

/// One `key: value` pair found in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Full key, possibly carrying a variant suffix.
    pub key: String,
    pub value: RawLiteral,
    pub comment: Option<String>,
    /// Location of the key.
    pub location: SourceLocation,
}

/// Declarations sharing one `{ ... }` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTable {
    /// Last literal on the line of the opening brace, e.g. `"en"` in
    /// `loc.Translations["en"] = map[string]string{`.
    pub label: Option<String>,
    /// Location of the opening brace.
    pub location: SourceLocation,
    pub declarations: Vec<Declaration>,
}

/// Everything extracted from one source file.
#[derive(Debug, Clone)]
pub struct FileExtraction {
    pub file: String,
    pub language: SourceLanguage,
    pub tables: Vec<ExtractedTable>,
    pub errors: Vec<ExtractError>,
}

impl FileExtraction {
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.tables.iter().flat_map(|table| &table.declarations)
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Resolve variants into entries, one group per table label.
    ///
    /// Tables sharing a label (or all unlabeled tables) are resolved
    /// together. Fails with every extraction and resolution error when there
    /// is any.
    pub fn entries(
        &self,
        separator: &str,
    ) -> Result<BTreeMap<Option<String>, Vec<TranslationEntry>>, Vec<ExtractError>> {
        let mut grouped: BTreeMap<Option<String>, Vec<Declaration>> = BTreeMap::new();
        for table in &self.tables {
            grouped
                .entry(table.label.clone())
                .or_default()
                .extend(table.declarations.iter().cloned());
        }

        let mut errors = self.errors.clone();
        let groups = grouped
            .into_iter()
            .map(|(label, declarations)| {
                let (entries, resolve_errors) = variants::resolve(declarations, separator);
                errors.extend(resolve_errors);
                (label, entries)
            })
            .collect();
        if errors.is_empty() {
            Ok(groups)
        } else {
            Err(errors)
        }
    }
}

/// Extract the declarations of `src`, a `language` source file named `file`.
pub fn extract(src: &str, language: SourceLanguage, file: &str) -> FileExtraction {
    let syntax = language.syntax();
    let lines = LineIndex::new(src);
    let mut extraction = FileExtraction {
        file: file.to_string(),
        language,
        tables: Vec::new(),
        errors: Vec::new(),
    };

    let tokens = match tokenize(src, syntax) {
        Ok(tokens) => tokens,
        Err(err) => {
            tracing::debug!(file, %err, "scanning failed");
            extraction.errors.push(malformed(&lines, src, file, err));
            return extraction;
        }
    };

    let constants = if syntax.supports_constants() {
        constants::collect_constants(src, &tokens, syntax, &lines)
    } else {
        HashMap::new()
    };

    let walker = Walker {
        src,
        file,
        syntax,
        lines: &lines,
        tokens: &tokens,
        constants: &constants,
    };
    let (tables, errors) = walker.run();
    extraction.tables = tables;
    extraction.errors = errors;

    tracing::debug!(
        file,
        tables = extraction.tables.len(),
        declarations = extraction.declarations().count(),
        errors = extraction.errors.len(),
        "extracted"
    );
    extraction
}

fn malformed(lines: &LineIndex, src: &str, file: &str, err: MalformedLiteral) -> ExtractError {
    ExtractError::MalformedLiteral {
        location: lines.location(src, file, err.offset),
        reason: err.reason,
    }
}

// ============================================================
// Declaration walk
// ============================================================

/// A `{` that has been opened but not closed yet.
struct OpenTable {
    order: usize,
    table: ExtractedTable,
    seen: HashMap<String, SourceLocation>,
    /// Identifier keys that named no constant. Reported only if the table
    /// turns out to hold declarations, so struct literals stay quiet.
    unresolved: Vec<ExtractError>,
}

struct Walker<'a> {
    src: &'a str,
    file: &'a str,
    syntax: Syntax,
    lines: &'a LineIndex,
    tokens: &'a [Token],
    constants: &'a HashMap<String, String>,
}

impl Walker<'_> {
    fn run(&self) -> (Vec<ExtractedTable>, Vec<ExtractError>) {
        // Indexes of non-comment tokens
        let sig: Vec<usize> = (0..self.tokens.len())
            .filter(|&i| !self.tokens[i].is_comment())
            .collect();

        let mut open: Vec<OpenTable> = Vec::new();
        let mut closed: Vec<(usize, ExtractedTable)> = Vec::new();
        let mut errors = Vec::new();
        let mut opened = 0;

        for (pos, &idx) in sig.iter().enumerate() {
            let token = self.tokens[idx];
            match token.kind {
                TokenKind::Punct(b'{') => {
                    open.push(OpenTable {
                        order: opened,
                        table: ExtractedTable {
                            label: self.label(&sig[..pos], token.start),
                            location: self.location(token.start),
                            declarations: Vec::new(),
                        },
                        seen: HashMap::new(),
                        unresolved: Vec::new(),
                    });
                    opened += 1;
                }
                TokenKind::Punct(b'}') => {
                    if let Some(table) = open.pop() {
                        close(table, &mut closed, &mut errors);
                    }
                }
                TokenKind::Literal { .. } | TokenKind::Ident => {
                    if let Some(table) = open.last_mut() {
                        self.try_declaration(&sig, pos, table, &mut errors);
                    }
                }
                _ => {}
            }
        }

        // Unbalanced braces: keep what was found
        while let Some(table) = open.pop() {
            close(table, &mut closed, &mut errors);
        }

        closed.sort_by_key(|(order, _)| *order);
        errors.sort_by(|a, b| a.location().cmp(b.location()));
        (closed.into_iter().map(|(_, table)| table).collect(), errors)
    }

    /// Check whether the significant token at `pos` starts a declaration.
    fn try_declaration(
        &self,
        sig: &[usize],
        pos: usize,
        table: &mut OpenTable,
        errors: &mut Vec<ExtractError>,
    ) {
        let at = |offset: usize| sig.get(offset).map(|&i| (i, self.tokens[i]));

        let Some(prev) = pos.checked_sub(1).and_then(at) else {
            return;
        };
        if !(prev.1.is_punct(b'{') || prev.1.is_punct(b',')) {
            return;
        }
        let (Some((key_idx, key)), Some((_, colon)), Some((value_idx, value))) =
            (at(pos), at(pos + 1), at(pos + 2))
        else {
            return;
        };
        if !colon.is_punct(b':') || !value.is_literal() {
            return;
        }
        if !at(pos + 3).is_some_and(|(_, next)| next.is_punct(b',') || next.is_punct(b'}')) {
            return;
        }

        let location = self.location(key.start);
        let key_text = match self.key_text(&key, &location) {
            Ok(Some(text)) => text,
            Ok(None) => return,
            Err(KeyError::Unresolved(err)) => {
                table.unresolved.push(err);
                return;
            }
            Err(KeyError::Malformed(err)) => {
                errors.push(err);
                return;
            }
        };

        let Some(span) = value.literal_span() else {
            return;
        };
        let TokenKind::Literal { kind, delimiter } = value.kind else {
            return;
        };
        if !self.syntax.accepts_value(kind, delimiter) {
            tracing::debug!(
                file = self.file,
                line = location.line,
                key = %key_text,
                "skipping declaration with unsupported value literal"
            );
            return;
        }
        let value_literal = match self.syntax.decode(self.src, &span) {
            Ok(literal) => literal,
            Err(err) => {
                errors.push(malformed(self.lines, self.src, self.file, err));
                return;
            }
        };

        if let Some(first) = table.seen.get(&key_text) {
            errors.push(ExtractError::DuplicateKey {
                key: key_text,
                location,
                first: first.clone(),
            });
            return;
        }

        let mut comment_tokens = comments::leading(self.tokens, key_idx, self.lines);
        comment_tokens.extend(comments::trailing(self.tokens, value_idx, self.lines));

        table.seen.insert(key_text.clone(), location.clone());
        table.table.declarations.push(Declaration {
            key: key_text,
            value: value_literal,
            comment: comments::join(self.src, &comment_tokens),
            location,
        });
    }

    /// Text of a key token; `Ok(None)` when the token cannot be a key here.
    fn key_text(&self, key: &Token, location: &SourceLocation) -> Result<Option<String>, KeyError> {
        match key.kind {
            TokenKind::Literal { kind, delimiter } => {
                if !self.syntax.accepts_key(kind, delimiter) {
                    tracing::debug!(
                        file = self.file,
                        line = location.line,
                        key = key.text(self.src),
                        "skipping declaration with unsupported key literal"
                    );
                    return Ok(None);
                }
                let Some(span) = key.literal_span() else {
                    return Ok(None);
                };
                self.syntax
                    .decode(self.src, &span)
                    .map(|literal| Some(literal.decoded_text))
                    .map_err(|err| KeyError::Malformed(malformed(self.lines, self.src, self.file, err)))
            }
            TokenKind::Ident if self.syntax.supports_constants() => {
                let name = key.text(self.src);
                match self.constants.get(name) {
                    Some(value) => Ok(Some(value.clone())),
                    None => Err(KeyError::Unresolved(ExtractError::UnresolvedConstant {
                        name: name.to_string(),
                        location: location.clone(),
                    })),
                }
            }
            _ => Ok(None),
        }
    }

    /// Last literal before an opening brace on the brace's line.
    fn label(&self, before: &[usize], brace: usize) -> Option<String> {
        let line = self.lines.line(brace);

        before
            .iter()
            .rev()
            .map(|&i| self.tokens[i])
            .take_while(|t| self.lines.line(t.start) == line)
            .take_while(|t| !(t.is_punct(b'{') || t.is_punct(b'}') || t.is_punct(b';')))
            .find_map(|t| t.literal_span())
            .and_then(|span| self.syntax.decode(self.src, &span).ok())
            .map(|literal| literal.decoded_text)
    }

    fn location(&self, offset: usize) -> SourceLocation {
        self.lines.location(self.src, self.file, offset)
    }
}

enum KeyError {
    Unresolved(ExtractError),
    Malformed(ExtractError),
}

fn close(
    open: OpenTable,
    closed: &mut Vec<(usize, ExtractedTable)>,
    errors: &mut Vec<ExtractError>,
) {
    if open.table.declarations.is_empty() {
        return;
    }
    errors.extend(open.unresolved);
    closed.push((open.order, open.table));
}
