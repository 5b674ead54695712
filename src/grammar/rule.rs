//! Grammar rules and the lookup table the walker validates against.

use indexmap::IndexMap;
use thiserror::Error;

use super::TokenType;

/// Declared type of an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    String,
    Boolean,
    Number,
}

impl ValueType {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Boolean => "boolean",
            ValueType::Number => "number",
        }
    }
}

/// One attribute an element may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeRule {
    pub name: &'static str,
    pub value_type: ValueType,
    pub description: &'static str,
    pub required: bool,
}

impl AttributeRule {
    pub const fn required(
        name: &'static str,
        value_type: ValueType,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            value_type,
            description,
            required: true,
        }
    }

    pub const fn optional(
        name: &'static str,
        value_type: ValueType,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            value_type,
            description,
            required: false,
        }
    }
}

/// Which child elements an element may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildRule {
    /// No child elements.
    None,
    /// Any element name is accepted.
    Any,
    /// Only the listed element names.
    Only(&'static [&'static str]),
}

impl ChildRule {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, ChildRule::Any)
    }

    pub fn allows(&self, name: &str) -> bool {
        match self {
            ChildRule::None => false,
            ChildRule::Any => true,
            ChildRule::Only(names) => names.contains(&name),
        }
    }
}

/// Structural rule for one element name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrammarRule {
    pub name: &'static str,
    /// Classification tag used for highlighting.
    pub token_type: TokenType,
    pub description: &'static str,
    pub attributes: &'static [AttributeRule],
    pub children: ChildRule,
    /// `None` means no parent constraint; such a rule is a valid root.
    pub parents: Option<&'static [&'static str]>,
}

impl GrammarRule {
    pub fn is_root(&self) -> bool {
        self.parents.is_none()
    }

    pub fn allows_parent(&self, parent: &str) -> bool {
        self.parents.is_none_or(|parents| parents.contains(&parent))
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeRule> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    pub fn required_attributes(&self) -> impl Iterator<Item = &'static str> {
        self.attributes
            .iter()
            .filter(|attr| attr.required)
            .map(|attr| attr.name)
    }

    pub fn optional_attributes(&self) -> impl Iterator<Item = &'static str> {
        self.attributes
            .iter()
            .filter(|attr| !attr.required)
            .map(|attr| attr.name)
    }
}

/// Invalid grammar data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("duplicate grammar rule: {0}")]
    DuplicateRule(&'static str),

    #[error("grammar has no root rule")]
    NoRoot,

    #[error("grammar has more than one root rule: {}", .0.join(", "))]
    MultipleRoots(Vec<&'static str>),
}

/// Immutable mapping from element name to its [`GrammarRule`].
///
/// Rules keep their declaration order, so iteration is deterministic.
#[derive(Debug, Clone)]
pub struct GrammarTable {
    rules: IndexMap<&'static str, GrammarRule>,
    root: &'static str,
}

impl GrammarTable {
    /// Build a table, checking that names are unique and that exactly one
    /// rule can serve as the document root.
    pub fn new(rules: impl IntoIterator<Item = GrammarRule>) -> Result<Self, GrammarError> {
        let mut table = IndexMap::new();
        for rule in rules {
            if table.insert(rule.name, rule).is_some() {
                return Err(GrammarError::DuplicateRule(rule.name));
            }
        }

        let roots: Vec<_> = table
            .values()
            .filter(|rule| rule.is_root())
            .map(|rule| rule.name)
            .collect();
        let root = match roots.as_slice() {
            [] => return Err(GrammarError::NoRoot),
            [root] => *root,
            _ => return Err(GrammarError::MultipleRoots(roots)),
        };

        Ok(Self { rules: table, root })
    }

    pub fn get(&self, name: &str) -> Option<&GrammarRule> {
        self.rules.get(name)
    }

    /// The rule for the designated root element.
    pub fn root_rule(&self) -> &GrammarRule {
        &self.rules[self.root]
    }

    pub fn root_name(&self) -> &'static str {
        self.root
    }

    pub fn rules(&self) -> impl Iterator<Item = &GrammarRule> {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
