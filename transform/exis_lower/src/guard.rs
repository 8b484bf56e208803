//! Guard synthesis: the boolean test controlling the rewritten conditional.

use exis_ast::ast::{BinaryOperator, ExpressionNode};
use exis_ast::build;

/// `typeof object !== "<type_name>"`
fn is_not_type_of(object: &ExpressionNode, type_name: &str) -> ExpressionNode {
    build::binary(
        BinaryOperator::StrictNe,
        build::type_of(object.clone()),
        build::string(type_name),
    )
}

/// `typeof object === "<type_name>"`
fn is_type_of(object: &ExpressionNode, type_name: &str) -> ExpressionNode {
    build::binary(
        BinaryOperator::StrictEq,
        build::type_of(object.clone()),
        build::string(type_name),
    )
}

fn is_not_undefined(object: &ExpressionNode) -> ExpressionNode {
    is_not_type_of(object, "undefined")
}

/// `object !== null`. A `typeof` comparison cannot express this: `typeof`
/// never yields `"null"`.
fn is_not_null(object: &ExpressionNode) -> ExpressionNode {
    build::binary(BinaryOperator::StrictNe, object.clone(), build::null())
}

fn is_callable(object: &ExpressionNode) -> ExpressionNode {
    is_type_of(object, "function")
}

/// Guard for a plain member access:
/// `typeof object !== "undefined" && object !== null`.
///
/// The object expression is cloned into each comparison; side effects in it
/// run once per copy. The guard is type-comparison based, so `0`, `""` and
/// `false` all count as present.
pub fn member_guard(object: &ExpressionNode) -> ExpressionNode {
    build::logical_and(is_not_undefined(object), is_not_null(object))
}

/// Guard for a call-position access: the member guard combined with
/// `typeof object === "function"`, so the object is defined, non-null,
/// and callable.
pub fn call_guard(object: &ExpressionNode) -> ExpressionNode {
    build::logical_and(member_guard(object), is_callable(object))
}
