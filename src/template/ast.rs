use std::{collections::BTreeSet, fmt};

/// Name suffix that turns a placeholder with branches into a plural selection.
pub const PLURAL_SUFFIX: &str = "_PLURAL";

/// Parsed form of a template string.
///
/// Trees are plain data and print back to the markup they were parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateNode {
    /// Literal text.
    Text(String),
    /// `{NAME}`: the bound value.
    Named(String),
    /// `{NAME_PLURAL:one|other}`: a branch chosen by the plural rule for the
    /// number bound to `NAME` (stored without the suffix).
    Plural {
        name: String,
        branches: Vec<TemplateNode>,
    },
    /// `{NAME:first|second|third}`: the branch at the 0-based index bound to `NAME`.
    /// When the template also has a `NAME_PLURAL` selection, `NAME` is a
    /// quantity and counts past the last branch use the last branch.
    Alternative {
        name: String,
        alternatives: Vec<TemplateNode>,
    },
    Sequence(Vec<TemplateNode>),
}

impl TemplateNode {
    /// Every binding name the template refers to.
    pub fn placeholder_names(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        match self {
            TemplateNode::Text(_) => {}
            TemplateNode::Named(name) => {
                names.insert(name);
            }
            TemplateNode::Plural { name, branches: children }
            | TemplateNode::Alternative {
                name,
                alternatives: children,
            } => {
                names.insert(name);
                children.iter().for_each(|child| child.collect_names(names));
            }
            TemplateNode::Sequence(children) => {
                children.iter().for_each(|child| child.collect_names(names));
            }
        }
    }

    /// Names that some `_PLURAL` selection in the template counts by.
    pub fn quantity_names(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        self.collect_quantities(&mut names);
        names
    }

    fn collect_quantities<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        match self {
            TemplateNode::Text(_) | TemplateNode::Named(_) => {}
            TemplateNode::Plural { name, branches } => {
                names.insert(name);
                branches.iter().for_each(|child| child.collect_quantities(names));
            }
            TemplateNode::Alternative { alternatives: children, .. }
            | TemplateNode::Sequence(children) => {
                children.iter().for_each(|child| child.collect_quantities(names));
            }
        }
    }

    /// Whether the template is plain text without placeholders.
    pub fn is_plain(&self) -> bool {
        match self {
            TemplateNode::Text(_) => true,
            TemplateNode::Sequence(children) => children.iter().all(TemplateNode::is_plain),
            _ => false,
        }
    }
}

fn write_branches(f: &mut fmt::Formatter<'_>, branches: &[TemplateNode]) -> fmt::Result {
    for (i, branch) in branches.iter().enumerate() {
        if i > 0 {
            f.write_str("|")?;
        }
        write!(f, "{branch}")?;
    }
    Ok(())
}

impl fmt::Display for TemplateNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateNode::Text(text) => f.write_str(text),
            TemplateNode::Named(name) => write!(f, "{{{name}}}"),
            TemplateNode::Plural { name, branches } => {
                write!(f, "{{{name}{PLURAL_SUFFIX}:")?;
                write_branches(f, branches)?;
                f.write_str("}")
            }
            TemplateNode::Alternative { name, alternatives } => {
                write!(f, "{{{name}:")?;
                write_branches(f, alternatives)?;
                f.write_str("}")
            }
            TemplateNode::Sequence(children) => {
                children.iter().try_for_each(|child| write!(f, "{child}"))
            }
        }
    }
}
