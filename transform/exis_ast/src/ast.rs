// Abstract syntax tree definitions for the Exis expression language in Rust
// The node set mirrors the expression grammar of the JavaScript-like target

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExpressionNode {
    Identifier(IdentifierNode),
    Literal(LiteralNode),
    Unary(Box<UnaryExpressionNode>),
    Binary(Box<BinaryExpressionNode>),
    Logical(Box<LogicalExpressionNode>),
    Conditional(Box<ConditionalExpressionNode>),
    Call(Box<CallExpressionNode>),
    Member(Box<MemberExpressionNode>),
}

/// `mem::take` on an expression slot leaves a null literal behind.
impl Default for ExpressionNode {
    fn default() -> Self {
        ExpressionNode::Literal(LiteralNode::Null)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IdentifierNode {
    pub name: String,
}

impl IdentifierNode {
    pub fn new(name: impl Into<String>) -> Self {
        IdentifierNode { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LiteralNode {
    Int(i64),
    Float(f64),
    Bool(bool),
    String(String),
    Null,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOperator {
    /// `typeof x`
    TypeOf,
    /// `void x`
    Void,
    /// `!x`
    Not,
    /// `-x`
    Neg,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnaryExpressionNode {
    pub operator: UnaryOperator,
    pub operand: ExpressionNode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
    /// `===`
    StrictEq,
    /// `!==`
    StrictNe,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinaryExpressionNode {
    pub left: ExpressionNode,
    pub operator: BinaryOperator,
    pub right: ExpressionNode,
}

/// Short-circuiting operators are kept apart from `BinaryOperator` so the
/// evaluator cannot accidentally force both operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LogicalOperator {
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LogicalExpressionNode {
    pub left: ExpressionNode,
    pub operator: LogicalOperator,
    pub right: ExpressionNode,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConditionalExpressionNode {
    pub test: ExpressionNode,
    pub consequent: ExpressionNode,
    pub alternate: ExpressionNode,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CallExpressionNode {
    pub callee: ExpressionNode,
    pub arguments: Vec<ExpressionNode>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MemberExpressionNode {
    pub object: ExpressionNode,
    pub property: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StatementNode {
    Expr(ExpressionNode),
    Let(Box<LetStatementNode>),
    Return(Box<ReturnNode>),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetStatementNode {
    pub name: String,
    pub value: ExpressionNode,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReturnNode {
    pub value: Option<ExpressionNode>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProgramNode {
    pub statements: Vec<StatementNode>,
}
