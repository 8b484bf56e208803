//! Rewriting traversal over expression slots.
//!
//! The walk visits every expression position in a program depth-first,
//! pre-order, handing the callback a mutable slot together with a [`Cursor`]
//! describing how the slot hangs off its ancestors. Replacement is performed
//! by assigning a new subtree through the slot (`mem::take` + assign); after
//! a replacement the walk descends into the replacement's children, so a
//! callback must not reproduce the pattern it triggers on.

use crate::ast::*;

/// Coarse node tag used in ancestry metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Identifier,
    Literal,
    Unary,
    Binary,
    Logical,
    Conditional,
    Call,
    Member,
    ExprStmt,
    Let,
    Return,
}

impl NodeKind {
    pub fn of(expr: &ExpressionNode) -> NodeKind {
        match expr {
            ExpressionNode::Identifier(_) => NodeKind::Identifier,
            ExpressionNode::Literal(_) => NodeKind::Literal,
            ExpressionNode::Unary(_) => NodeKind::Unary,
            ExpressionNode::Binary(_) => NodeKind::Binary,
            ExpressionNode::Logical(_) => NodeKind::Logical,
            ExpressionNode::Conditional(_) => NodeKind::Conditional,
            ExpressionNode::Call(_) => NodeKind::Call,
            ExpressionNode::Member(_) => NodeKind::Member,
        }
    }
}

/// The edge a child expression occupies on its parent node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// `object` of a member access.
    MemberObject,
    /// `callee` of a call.
    Callee,
    /// One of a call's arguments.
    Argument,
    /// Operand of a unary operator.
    Operand,
    /// Left side of a binary/logical node.
    Left,
    /// Right side of a binary/logical node.
    Right,
    Test,
    Consequent,
    Alternate,
    /// The expression held by a statement (expression statement, `let`
    /// initializer, `return` value).
    StatementValue,
}

/// One ancestry step: the ancestor's kind plus the edge the child occupies
/// on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AncestorLink {
    pub kind: NodeKind,
    pub edge: Edge,
}

/// Borrowed view of the ancestry of the slot currently being visited.
///
/// Lives exactly for one callback invocation. The innermost ancestor (the
/// slot's direct parent) is last.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    ancestors: &'a [AncestorLink],
}

impl<'a> Cursor<'a> {
    pub fn parent(&self) -> Option<AncestorLink> {
        self.ancestors.last().copied()
    }

    pub fn grandparent(&self) -> Option<AncestorLink> {
        let len = self.ancestors.len();
        if len >= 2 {
            Some(self.ancestors[len - 2])
        } else {
            None
        }
    }

    pub fn parent_exists(&self) -> bool {
        !self.ancestors.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }
}

/// Walks every expression slot in `program`, invoking `f` per slot.
pub fn rewrite_program<F>(program: &mut ProgramNode, f: &mut F)
where
    F: FnMut(&mut ExpressionNode, Cursor<'_>),
{
    let mut stack = Vec::new();
    for statement in &mut program.statements {
        rewrite_statement(statement, &mut stack, f);
    }
}

/// Walks every expression slot in a single statement.
pub fn rewrite_statement<F>(statement: &mut StatementNode, stack: &mut Vec<AncestorLink>, f: &mut F)
where
    F: FnMut(&mut ExpressionNode, Cursor<'_>),
{
    match statement {
        StatementNode::Expr(expr) => {
            descend(expr, NodeKind::ExprStmt, Edge::StatementValue, stack, f);
        }
        StatementNode::Let(stmt) => {
            descend(&mut stmt.value, NodeKind::Let, Edge::StatementValue, stack, f);
        }
        StatementNode::Return(stmt) => {
            if let Some(value) = &mut stmt.value {
                descend(value, NodeKind::Return, Edge::StatementValue, stack, f);
            }
        }
    }
}

/// Walks every expression slot under `expr`, treating it as a root-level
/// expression (no ancestry).
pub fn rewrite_expression<F>(expr: &mut ExpressionNode, f: &mut F)
where
    F: FnMut(&mut ExpressionNode, Cursor<'_>),
{
    let mut stack = Vec::new();
    rewrite_slot(expr, &mut stack, f);
}

fn descend<F>(
    slot: &mut ExpressionNode,
    kind: NodeKind,
    edge: Edge,
    stack: &mut Vec<AncestorLink>,
    f: &mut F,
) where
    F: FnMut(&mut ExpressionNode, Cursor<'_>),
{
    stack.push(AncestorLink { kind, edge });
    rewrite_slot(slot, stack, f);
    stack.pop();
}

fn rewrite_slot<F>(slot: &mut ExpressionNode, stack: &mut Vec<AncestorLink>, f: &mut F)
where
    F: FnMut(&mut ExpressionNode, Cursor<'_>),
{
    f(slot, Cursor { ancestors: stack });

    // `slot` may hold a replacement by now; descend into whatever is there.
    let kind = NodeKind::of(slot);
    match slot {
        ExpressionNode::Identifier(_) | ExpressionNode::Literal(_) => {}
        ExpressionNode::Unary(node) => {
            descend(&mut node.operand, kind, Edge::Operand, stack, f);
        }
        ExpressionNode::Binary(node) => {
            descend(&mut node.left, kind, Edge::Left, stack, f);
            descend(&mut node.right, kind, Edge::Right, stack, f);
        }
        ExpressionNode::Logical(node) => {
            descend(&mut node.left, kind, Edge::Left, stack, f);
            descend(&mut node.right, kind, Edge::Right, stack, f);
        }
        ExpressionNode::Conditional(node) => {
            descend(&mut node.test, kind, Edge::Test, stack, f);
            descend(&mut node.consequent, kind, Edge::Consequent, stack, f);
            descend(&mut node.alternate, kind, Edge::Alternate, stack, f);
        }
        ExpressionNode::Call(node) => {
            descend(&mut node.callee, kind, Edge::Callee, stack, f);
            for argument in &mut node.arguments {
                descend(argument, kind, Edge::Argument, stack, f);
            }
        }
        ExpressionNode::Member(node) => {
            descend(&mut node.object, kind, Edge::MemberObject, stack, f);
        }
    }
}
