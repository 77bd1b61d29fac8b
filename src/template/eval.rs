use std::collections::BTreeSet;

use super::{
    ast::TemplateNode,
    error::EvalError,
    plural::PluralRule,
    value::{Bindings, Value},
};

/// Evaluates template trees against bindings with one plural rule.
///
/// Evaluation is left to right and depth first; the same tree, bindings and
/// rule always produce the same text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    rule: PluralRule,
}

impl Evaluator {
    pub fn new(rule: PluralRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> PluralRule {
        self.rule
    }

    pub fn evaluate(&self, node: &TemplateNode, bindings: &Bindings) -> Result<String, EvalError> {
        let scope = Scope {
            bindings,
            quantities: node.quantity_names(),
        };
        let mut out = String::new();
        self.write(node, &scope, &mut out)?;
        Ok(out)
    }

    fn write(&self, node: &TemplateNode, scope: &Scope<'_>, out: &mut String) -> Result<(), EvalError> {
        let bindings = scope.bindings;
        match node {
            TemplateNode::Text(text) => out.push_str(text),
            TemplateNode::Named(name) => match lookup(bindings, name)? {
                Value::Number(n) => out.push_str(&n.to_string()),
                Value::Text(text) => out.push_str(text),
            },
            TemplateNode::Plural { name, branches } => {
                let count = number(bindings, name)?;
                // Quantities past the last branch use the last branch
                let index = self
                    .rule
                    .branch_index(count)
                    .min(branches.len().saturating_sub(1));
                if let Some(branch) = branches.get(index) {
                    self.write(branch, scope, out)?;
                }
            }
            TemplateNode::Alternative { name, alternatives } => {
                let index = number(bindings, name)?;
                let position = if scope.quantities.contains(name.as_str()) {
                    // Counted by a plural selection: 0, 1, then the last branch for the rest
                    let last = alternatives.len().saturating_sub(1);
                    usize::try_from(index.unsigned_abs()).map_or(last, |n| n.min(last))
                } else {
                    usize::try_from(index).unwrap_or(usize::MAX)
                };
                let branch =
                    alternatives
                        .get(position)
                        .ok_or_else(|| EvalError::IndexOutOfRange {
                            name: name.clone(),
                            index,
                            len: alternatives.len(),
                        })?;
                self.write(branch, scope, out)?;
            }
            TemplateNode::Sequence(children) => {
                for child in children {
                    self.write(child, scope, out)?;
                }
            }
        }
        Ok(())
    }
}

/// Bindings plus the names the template pluralizes on.
struct Scope<'a> {
    bindings: &'a Bindings,
    quantities: BTreeSet<&'a str>,
}

fn lookup<'a>(bindings: &'a Bindings, name: &str) -> Result<&'a Value, EvalError> {
    bindings.get(name).ok_or_else(|| EvalError::UnboundName {
        name: name.to_string(),
    })
}

fn number(bindings: &Bindings, name: &str) -> Result<i64, EvalError> {
    lookup(bindings, name)?
        .as_number()
        .ok_or_else(|| EvalError::TypeMismatch {
            name: name.to_string(),
        })
}

/// Evaluate with the default (English) plural rule.
pub fn evaluate(node: &TemplateNode, bindings: &Bindings) -> Result<String, EvalError> {
    Evaluator::default().evaluate(node, bindings)
}
