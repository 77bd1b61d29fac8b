//! Recursive-descent parser for the placeholder grammar:
//!
//! ```text
//! template    := (text | placeholder)*
//! placeholder := '{' name [ ':' branches ] '}'
//! branches    := branch ('|' branch)*
//! branch      := (text | placeholder)*
//! ```

use super::{
    ast::{PLURAL_SUFFIX, TemplateNode},
    error::{SyntaxErrorKind, TemplateSyntaxError},
};

/// Parse a template string into its evaluation tree.
pub fn parse(text: &str) -> Result<TemplateNode, TemplateSyntaxError> {
    let mut parser = Parser { src: text, pos: 0 };
    parser.parse_sequence(false)
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.src.get(self.pos..)?.chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    /// Parse text and placeholders up to the end of input, or inside a
    /// branch up to the `|` or `}` that ends it (left unconsumed).
    fn parse_sequence(&mut self, in_branch: bool) -> Result<TemplateNode, TemplateSyntaxError> {
        let mut nodes = Vec::new();
        let mut text = String::new();

        while let Some(c) = self.peek() {
            match c {
                '{' => {
                    if !text.is_empty() {
                        nodes.push(TemplateNode::Text(std::mem::take(&mut text)));
                    }
                    nodes.push(self.parse_placeholder()?);
                }
                '}' | '|' if in_branch => break,
                '}' => {
                    return Err(TemplateSyntaxError::new(
                        self.pos,
                        SyntaxErrorKind::UnmatchedCloseBrace,
                    ));
                }
                '|' => {
                    return Err(TemplateSyntaxError::new(
                        self.pos,
                        SyntaxErrorKind::StrayPipe,
                    ));
                }
                _ => {
                    text.push(c);
                    self.bump(c);
                }
            }
        }

        if !text.is_empty() {
            nodes.push(TemplateNode::Text(text));
        }
        Ok(if nodes.len() == 1 {
            nodes.remove(0)
        } else {
            TemplateNode::Sequence(nodes)
        })
    }

    fn parse_placeholder(&mut self) -> Result<TemplateNode, TemplateSyntaxError> {
        let src = self.src;
        let open = self.pos;
        self.bump('{');

        let name_start = self.pos;
        while let Some(c) = self.peek().filter(|&c| is_name_char(c)) {
            self.bump(c);
        }
        let name = &src[name_start..self.pos];

        match self.peek() {
            None => Err(TemplateSyntaxError::new(
                open,
                SyntaxErrorKind::UnmatchedOpenBrace,
            )),
            Some('}' | ':') if name.is_empty() => Err(TemplateSyntaxError::new(
                name_start,
                SyntaxErrorKind::EmptyName,
            )),
            Some('}') => {
                self.bump('}');
                Ok(TemplateNode::Named(name.to_string()))
            }
            Some(':') => {
                self.bump(':');
                let branches = self.parse_branches(open)?;
                match name.strip_suffix(PLURAL_SUFFIX) {
                    Some("") => Err(TemplateSyntaxError::new(
                        name_start,
                        SyntaxErrorKind::EmptyPluralName,
                    )),
                    Some(stem) => Ok(TemplateNode::Plural {
                        name: stem.to_string(),
                        branches,
                    }),
                    None => Ok(TemplateNode::Alternative {
                        name: name.to_string(),
                        alternatives: branches,
                    }),
                }
            }
            Some(c) => Err(TemplateSyntaxError::new(
                self.pos,
                SyntaxErrorKind::InvalidNameChar(c),
            )),
        }
    }

    /// Parse `branch ('|' branch)* '}'` for the placeholder opened at `open`.
    fn parse_branches(&mut self, open: usize) -> Result<Vec<TemplateNode>, TemplateSyntaxError> {
        let mut branches = Vec::new();
        loop {
            branches.push(self.parse_sequence(true)?);
            match self.peek() {
                Some('|') => self.bump('|'),
                Some('}') => {
                    self.bump('}');
                    return Ok(branches);
                }
                _ => {
                    return Err(TemplateSyntaxError::new(
                        open,
                        SyntaxErrorKind::UnmatchedOpenBrace,
                    ));
                }
            }
        }
    }
}
