//! Visitor pattern implementation for traversing the AST.
//!
//! This module provides a read-only visitor for walking programs and
//! expressions. Implement `Visitor` to perform an operation per node kind;
//! AST nodes implement `Visitable` to accept visitors.

use crate::ast::*;

/// The result type for visitor operations.
pub type VisitResult<T = ()> = Result<T, VisitError>;

/// An error that can occur during AST traversal.
#[derive(Debug, thiserror::Error)]
pub enum VisitError {
    /// An error with a custom message.
    #[error("{0}")]
    Custom(String),
}

impl VisitError {
    /// Creates a new custom error with the given message.
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        VisitError::Custom(msg.into())
    }
}

/// A trait for types that can be visited by a `Visitor`.
pub trait Visitable {
    /// Accepts a visitor and calls the appropriate visit method.
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output>;

    /// Visits the children of this node with the given visitor.
    ///
    /// The default implementation does nothing.
    fn visit_children<V: Visitor + ?Sized>(&self, _visitor: &mut V) -> VisitResult<V::Output> {
        Ok(Default::default())
    }
}

/// A visitor for traversing the AST.
///
/// The default implementations descend into children and return
/// `Ok(Default::default())`.
pub trait Visitor {
    /// The output type of the visitor.
    type Output: Default;

    fn visit_identifier(&mut self, node: &IdentifierNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_literal(&mut self, node: &LiteralNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_unary_expr(&mut self, node: &UnaryExpressionNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_binary_expr(&mut self, node: &BinaryExpressionNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_logical_expr(&mut self, node: &LogicalExpressionNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_conditional_expr(
        &mut self,
        node: &ConditionalExpressionNode,
    ) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_call_expr(&mut self, node: &CallExpressionNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_member_expr(&mut self, node: &MemberExpressionNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_let_stmt(&mut self, node: &LetStatementNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_return_stmt(&mut self, node: &ReturnNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_program(&mut self, node: &ProgramNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    // Helper to visit children of a node
    fn visit_children<T: Visitable + ?Sized>(&mut self, node: &T) -> VisitResult<Self::Output> {
        node.visit_children(self)
    }
}

impl Visitable for ExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        match self {
            ExpressionNode::Identifier(node) => visitor.visit_identifier(node),
            ExpressionNode::Literal(node) => visitor.visit_literal(node),
            ExpressionNode::Unary(node) => visitor.visit_unary_expr(node),
            ExpressionNode::Binary(node) => visitor.visit_binary_expr(node),
            ExpressionNode::Logical(node) => visitor.visit_logical_expr(node),
            ExpressionNode::Conditional(node) => visitor.visit_conditional_expr(node),
            ExpressionNode::Call(node) => visitor.visit_call_expr(node),
            ExpressionNode::Member(node) => visitor.visit_member_expr(node),
        }
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.accept(visitor)
    }
}

impl Visitable for IdentifierNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_identifier(self)
    }
}

impl Visitable for LiteralNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_literal(self)
    }
}

impl Visitable for UnaryExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_unary_expr(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.operand.accept(visitor)
    }
}

impl Visitable for BinaryExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_binary_expr(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.left.accept(visitor)?;
        self.right.accept(visitor)
    }
}

impl Visitable for LogicalExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_logical_expr(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.left.accept(visitor)?;
        self.right.accept(visitor)
    }
}

impl Visitable for ConditionalExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_conditional_expr(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.test.accept(visitor)?;
        self.consequent.accept(visitor)?;
        self.alternate.accept(visitor)
    }
}

impl Visitable for CallExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_call_expr(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.callee.accept(visitor)?;
        for argument in &self.arguments {
            argument.accept(visitor)?;
        }
        Ok(Default::default())
    }
}

impl Visitable for MemberExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_member_expr(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.object.accept(visitor)
    }
}

impl Visitable for LetStatementNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_let_stmt(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.value.accept(visitor)
    }
}

impl Visitable for ReturnNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_return_stmt(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        match &self.value {
            Some(value) => value.accept(visitor),
            None => Ok(Default::default()),
        }
    }
}

impl Visitable for StatementNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        match self {
            StatementNode::Expr(expr) => expr.accept(visitor),
            StatementNode::Let(stmt) => visitor.visit_let_stmt(stmt),
            StatementNode::Return(stmt) => visitor.visit_return_stmt(stmt),
        }
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.accept(visitor)
    }
}

impl Visitable for ProgramNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_program(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        for statement in &self.statements {
            statement.accept(visitor)?;
        }
        Ok(Default::default())
    }
}

/// Collects every member property name reachable from `node`, in visit order.
pub fn member_properties<T: Visitable>(node: &T) -> Vec<String> {
    struct Properties {
        names: Vec<String>,
    }

    impl Visitor for Properties {
        type Output = ();

        fn visit_member_expr(&mut self, node: &MemberExpressionNode) -> VisitResult<()> {
            self.names.push(node.property.clone());
            self.visit_children(node)
        }
    }

    let mut visitor = Properties { names: Vec::new() };
    // The collecting visitor never fails.
    let _ = node.accept(&mut visitor);
    visitor.names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_visitor_pattern() {
        // a.b + f(c.d)
        let ast = build::binary(
            BinaryOperator::Add,
            build::member(build::identifier("a"), "b"),
            build::call(
                build::identifier("f"),
                vec![build::member(build::identifier("c"), "d")],
            ),
        );

        struct MemberCounter {
            count: usize,
        }

        impl Visitor for MemberCounter {
            type Output = ();

            fn visit_member_expr(&mut self, node: &MemberExpressionNode) -> VisitResult<()> {
                self.count += 1;
                self.visit_children(node)
            }
        }

        let mut counter = MemberCounter { count: 0 };
        ast.accept(&mut counter).unwrap();
        assert_eq!(counter.count, 2);
    }

    #[test]
    fn member_properties_walks_statements_and_arguments() {
        let program = ProgramNode {
            statements: vec![
                StatementNode::Let(Box::new(LetStatementNode {
                    name: "x".to_string(),
                    value: build::member_path(build::identifier("a"), &["b", "c"]),
                })),
                StatementNode::Expr(build::call(
                    build::identifier("f"),
                    vec![build::member(build::identifier("d"), "e")],
                )),
                StatementNode::Return(Box::new(ReturnNode { value: None })),
            ],
        };

        // Pre-order: the outermost member of a chain is visited first.
        assert_eq!(member_properties(&program), vec!["c", "b", "e"]);
    }

    #[test]
    fn visitor_errors_stop_the_walk() {
        struct FailOnIdentifier;

        impl Visitor for FailOnIdentifier {
            type Output = ();

            fn visit_identifier(&mut self, node: &IdentifierNode) -> VisitResult<()> {
                Err(VisitError::custom(format!("hit '{}'", node.name)))
            }
        }

        let ast = build::member(build::identifier("a"), "b");
        let err = ast.accept(&mut FailOnIdentifier).unwrap_err();
        assert_eq!(err.to_string(), "hit 'a'");
    }
}
