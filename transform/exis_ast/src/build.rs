//! Node-construction helpers.
//!
//! Transform passes synthesize replacement subtrees through these functions
//! instead of spelling out the nested node structs inline.

use crate::ast::*;

pub fn identifier(name: impl Into<String>) -> ExpressionNode {
    ExpressionNode::Identifier(IdentifierNode::new(name))
}

pub fn int(value: i64) -> ExpressionNode {
    ExpressionNode::Literal(LiteralNode::Int(value))
}

pub fn float(value: f64) -> ExpressionNode {
    ExpressionNode::Literal(LiteralNode::Float(value))
}

pub fn boolean(value: bool) -> ExpressionNode {
    ExpressionNode::Literal(LiteralNode::Bool(value))
}

pub fn string(value: impl Into<String>) -> ExpressionNode {
    ExpressionNode::Literal(LiteralNode::String(value.into()))
}

pub fn null() -> ExpressionNode {
    ExpressionNode::Literal(LiteralNode::Null)
}

pub fn unary(operator: UnaryOperator, operand: ExpressionNode) -> ExpressionNode {
    ExpressionNode::Unary(Box::new(UnaryExpressionNode { operator, operand }))
}

/// `typeof operand`
pub fn type_of(operand: ExpressionNode) -> ExpressionNode {
    unary(UnaryOperator::TypeOf, operand)
}

/// `void operand`
pub fn void_of(operand: ExpressionNode) -> ExpressionNode {
    unary(UnaryOperator::Void, operand)
}

pub fn binary(
    operator: BinaryOperator,
    left: ExpressionNode,
    right: ExpressionNode,
) -> ExpressionNode {
    ExpressionNode::Binary(Box::new(BinaryExpressionNode {
        left,
        operator,
        right,
    }))
}

pub fn logical(
    operator: LogicalOperator,
    left: ExpressionNode,
    right: ExpressionNode,
) -> ExpressionNode {
    ExpressionNode::Logical(Box::new(LogicalExpressionNode {
        left,
        operator,
        right,
    }))
}

/// `left && right`
pub fn logical_and(left: ExpressionNode, right: ExpressionNode) -> ExpressionNode {
    logical(LogicalOperator::And, left, right)
}

/// `left || right`
pub fn logical_or(left: ExpressionNode, right: ExpressionNode) -> ExpressionNode {
    logical(LogicalOperator::Or, left, right)
}

/// `test ? consequent : alternate`
pub fn conditional(
    test: ExpressionNode,
    consequent: ExpressionNode,
    alternate: ExpressionNode,
) -> ExpressionNode {
    ExpressionNode::Conditional(Box::new(ConditionalExpressionNode {
        test,
        consequent,
        alternate,
    }))
}

pub fn call(callee: ExpressionNode, arguments: Vec<ExpressionNode>) -> ExpressionNode {
    ExpressionNode::Call(Box::new(CallExpressionNode { callee, arguments }))
}

pub fn member(object: ExpressionNode, property: impl Into<String>) -> ExpressionNode {
    ExpressionNode::Member(Box::new(MemberExpressionNode {
        object,
        property: property.into(),
    }))
}

/// Builds `base.p1.p2...` from a property path. Convenient for tests.
pub fn member_path(base: ExpressionNode, properties: &[&str]) -> ExpressionNode {
    properties
        .iter()
        .fold(base, |object, property| member(object, *property))
}
