//! Classification tags assigned to recognized elements.

use bitflags::bitflags;

/// Token type for semantic highlighting.
///
/// Variants are declared in legend order; [`TokenType::to_lsp_index`] is the
/// position in [`TokenType::LEGEND`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenType {
    Comment,
    String,
    Keyword,
    Number,
    Regexp,
    Operator,
    Namespace,
    Type,
    Struct,
    Class,
    Interface,
    Enum,
    TypeParameter,
    Function,
    Method,
    Decorator,
    Macro,
    Variable,
    Parameter,
    Property,
    Label,
    EnumMember,
}

impl TokenType {
    /// Every token type, in legend order.
    pub const ALL: [TokenType; 22] = [
        TokenType::Comment,
        TokenType::String,
        TokenType::Keyword,
        TokenType::Number,
        TokenType::Regexp,
        TokenType::Operator,
        TokenType::Namespace,
        TokenType::Type,
        TokenType::Struct,
        TokenType::Class,
        TokenType::Interface,
        TokenType::Enum,
        TokenType::TypeParameter,
        TokenType::Function,
        TokenType::Method,
        TokenType::Decorator,
        TokenType::Macro,
        TokenType::Variable,
        TokenType::Parameter,
        TokenType::Property,
        TokenType::Label,
        TokenType::EnumMember,
    ];

    /// Legend names as registered with the editor.
    pub const LEGEND: [&'static str; 22] = [
        "comment",
        "string",
        "keyword",
        "number",
        "regexp",
        "operator",
        "namespace",
        "type",
        "struct",
        "class",
        "interface",
        "enum",
        "typeParameter",
        "function",
        "method",
        "decorator",
        "macro",
        "variable",
        "parameter",
        "property",
        "label",
        "enumMember",
    ];

    /// Convert to LSP token type index.
    pub fn to_lsp_index(self) -> u32 {
        self as u32
    }

    pub fn as_str(self) -> &'static str {
        Self::LEGEND[self as usize]
    }
}

bitflags! {
    /// Token modifiers, one bit per legend entry.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct TokenModifiers: u32 {
        const DECLARATION = 1 << 0;
        const DOCUMENTATION = 1 << 1;
        const READONLY = 1 << 2;
        const STATIC = 1 << 3;
        const ABSTRACT = 1 << 4;
        const DEPRECATED = 1 << 5;
        const MODIFICATION = 1 << 6;
        const ASYNC = 1 << 7;
    }
}

impl TokenModifiers {
    /// Legend names, indexed by bit position.
    pub const LEGEND: [&'static str; 8] = [
        "declaration",
        "documentation",
        "readonly",
        "static",
        "abstract",
        "deprecated",
        "modification",
        "async",
    ];
}
