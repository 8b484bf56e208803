//! The rewrite driver: marker dispatch and in-place replacement.
//!
//! Two slot shapes trigger a rewrite:
//!
//! * a member access whose property is the marker (`obj.prop.ex`): the
//!   slot itself is replaced;
//! * a call whose callee is such a member access (`obj.method.ex(args)`):
//!   the marker's parent is the replacement target, so the dispatch happens
//!   at the slot owning the call.
//!
//! Any other slot content is left untouched. Replacements contain no
//! marker, so the descending walk cannot re-trigger on them.

use std::mem;

use exis_ast::ast::ExpressionNode;
use exis_ast::build;
use exis_ast::cursor::{self, AncestorLink, Cursor, Edge, NodeKind};

use crate::classify::{classify, Neighborhood};
use crate::{branch, guard, MARKER_PROPERTY};

/// Lowers every marker access in `program`. Returns the number of rewrites
/// performed; zero means the tree was already fully lowered.
pub fn lower_program(program: &mut exis_ast::ast::ProgramNode) -> usize {
    let mut rewrites = 0;
    cursor::rewrite_program(program, &mut |slot, cur| {
        rewrite_slot(slot, &cur, &mut rewrites);
    });
    rewrites
}

/// Lowers every marker access under a root-level expression.
pub fn lower_expression(expr: &mut ExpressionNode) -> usize {
    let mut rewrites = 0;
    cursor::rewrite_expression(expr, &mut |slot, cur| {
        rewrite_slot(slot, &cur, &mut rewrites);
    });
    rewrites
}

fn is_marker_member(expr: &ExpressionNode) -> bool {
    matches!(expr, ExpressionNode::Member(member) if member.property == MARKER_PROPERTY)
}

fn rewrite_slot(slot: &mut ExpressionNode, cursor: &Cursor<'_>, rewrites: &mut usize) {
    match slot {
        ExpressionNode::Call(call) if is_marker_member(&call.callee) => {
            let object = match mem::take(&mut call.callee) {
                ExpressionNode::Member(member) => member.object,
                // The guard above ensures the callee is a member access.
                other => other,
            };
            let arguments = mem::take(&mut call.arguments);

            // Seen from the marker node, the call is the parent and the
            // slot's own parent is the grandparent.
            let classification = classify(&Neighborhood {
                parent: Some(AncestorLink {
                    kind: NodeKind::Call,
                    edge: Edge::Callee,
                }),
                grandparent: cursor.parent(),
            });
            log::trace!("classified callee marker: {classification:?}");
            log::debug!(
                "lowering call-position marker ({} args, chained: {})",
                arguments.len(),
                classification.chain_continues()
            );

            let test = guard::call_guard(&object);
            let consequent = branch::call_consequent(object, arguments);
            let alternate = branch::call_alternate(&classification);
            *slot = build::conditional(test, consequent, alternate);
            *rewrites += 1;
        }
        ExpressionNode::Member(member) if member.property == MARKER_PROPERTY => {
            let object = mem::take(&mut member.object);
            let classification = classify(&Neighborhood {
                parent: cursor.parent(),
                grandparent: cursor.grandparent(),
            });
            log::trace!("classified member marker: {classification:?}");
            log::debug!(
                "lowering member marker (chained: {})",
                classification.chain_continues()
            );

            let test = guard::member_guard(&object);
            let consequent = branch::member_consequent(object, &classification);
            let alternate = branch::member_alternate(&classification);
            *slot = build::conditional(test, consequent, alternate);
            *rewrites += 1;
        }
        _ => {}
    }
}
