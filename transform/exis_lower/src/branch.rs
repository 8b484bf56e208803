//! Branch synthesis: the success and failure values of the rewritten
//! conditional.

use exis_ast::ast::ExpressionNode;
use exis_ast::build;

use crate::classify::Classification;

/// Success value for a plain member access: the object itself when the
/// chain continues (so the next link can consume it), literal `true` when
/// the access is terminal.
pub fn member_consequent(
    object: ExpressionNode,
    classification: &Classification,
) -> ExpressionNode {
    if classification.chain_continues() {
        object
    } else {
        build::boolean(true)
    }
}

/// Failure value: `void 0` when the chain continues (an explicit
/// undefined-producing expression the next link can consume), literal
/// `false` when the access is terminal.
pub fn member_alternate(classification: &Classification) -> ExpressionNode {
    if classification.chain_continues() {
        build::void_of(build::int(0))
    } else {
        build::boolean(false)
    }
}

/// Success value for a call-position access: the call rebuilt with the
/// guarded object as callee and the original argument list.
pub fn call_consequent(
    object: ExpressionNode,
    arguments: Vec<ExpressionNode>,
) -> ExpressionNode {
    build::call(object, arguments)
}

/// Call failure shape matches the member one.
pub fn call_alternate(classification: &Classification) -> ExpressionNode {
    member_alternate(classification)
}
