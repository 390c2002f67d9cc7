//! Node kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of node kinds understood by the analyses
///
/// Conditional and exception-handling branches are wrapped in their own
/// kinds (`Then`, `Else`, `Catch`, `Finally`) so that sibling branches can
/// be told apart from the statement that owns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxKind {
    /// Root of a file
    Program,
    /// Class declaration
    Class,
    /// Object declaration, companion object or object literal
    Object,
    /// Body of a class or object
    ClassBody,
    /// Primary constructor of a class
    PrimaryConstructor,
    /// Super type list of a class
    SuperTypeList,
    /// Modifier list
    ModifierList,
    /// Single modifier keyword
    Modifier,
    /// Keyword token (`val`, `var`, ...)
    Keyword,
    /// Named function declaration
    Function,
    /// Lambda / function literal
    FunctionLiteral,
    /// Parameter list
    ParameterList,
    /// Single parameter
    Parameter,
    /// Type annotation
    TypeReference,
    /// Property (variable) declaration
    Property,
    /// Block of statements
    Block,
    /// Conditional expression
    If,
    /// Primary branch of a conditional
    Then,
    /// Alternative branch of a conditional
    Else,
    /// Exception-handling expression
    Try,
    /// Handler branch of a `Try`
    Catch,
    /// Finally branch of a `Try`
    Finally,
    /// Simple name reference
    NameReference,
    /// `this` expression
    This,
    /// `receiver.selector`
    DotQualified,
    /// `receiver?.selector`
    SafeQualified,
    /// Call expression
    Call,
    /// Argument list of a call
    ArgumentList,
    /// Binary expression
    Binary,
    /// Prefix or postfix unary expression
    Unary,
    /// Operator token of a binary or unary expression
    Operation,
    /// Literal constant
    Literal,
    /// Any other expression
    Unknown,
}

impl SyntaxKind {
    /// Nodes that bound where a declaration's references may appear
    pub fn is_scope(self) -> bool {
        matches!(self, Self::Block | Self::ClassBody | Self::Program)
    }

    /// Nodes that may appear as a property initializer or operand
    pub fn is_expression(self) -> bool {
        matches!(
            self,
            Self::NameReference
                | Self::This
                | Self::DotQualified
                | Self::SafeQualified
                | Self::Call
                | Self::Binary
                | Self::Unary
                | Self::Literal
                | Self::If
                | Self::Try
                | Self::FunctionLiteral
                | Self::Object
                | Self::Unknown
        )
    }

    /// `receiver.selector` and `receiver?.selector`
    pub fn is_qualified(self) -> bool {
        matches!(self, Self::DotQualified | Self::SafeQualified)
    }

    /// Nodes whose body block sees their parameters
    pub fn owns_parameters(self) -> bool {
        matches!(self, Self::Function | Self::FunctionLiteral | Self::Catch)
    }

    /// Nodes that must carry a name
    pub fn requires_name(self) -> bool {
        matches!(self, Self::Property | Self::Parameter | Self::NameReference)
    }

    /// The serialized name of the kind
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Program => "program",
            Self::Class => "class",
            Self::Object => "object",
            Self::ClassBody => "class_body",
            Self::PrimaryConstructor => "primary_constructor",
            Self::SuperTypeList => "super_type_list",
            Self::ModifierList => "modifier_list",
            Self::Modifier => "modifier",
            Self::Keyword => "keyword",
            Self::Function => "function",
            Self::FunctionLiteral => "function_literal",
            Self::ParameterList => "parameter_list",
            Self::Parameter => "parameter",
            Self::TypeReference => "type_reference",
            Self::Property => "property",
            Self::Block => "block",
            Self::If => "if",
            Self::Then => "then",
            Self::Else => "else",
            Self::Try => "try",
            Self::Catch => "catch",
            Self::Finally => "finally",
            Self::NameReference => "name_reference",
            Self::This => "this",
            Self::DotQualified => "dot_qualified",
            Self::SafeQualified => "safe_qualified",
            Self::Call => "call",
            Self::ArgumentList => "argument_list",
            Self::Binary => "binary",
            Self::Unary => "unary",
            Self::Operation => "operation",
            Self::Literal => "literal",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
