//! Invariants of the pass itself: no marker survives, a second pass is a
//! no-op, and the documented re-evaluation behavior of guarded objects.

use exis_ast::ast::{ExpressionNode, LetStatementNode, ProgramNode, StatementNode};
use exis_ast::build;
use exis_ast::visit::member_properties;
use exis_eval::{eval_expr, Env, Value};
use exis_lower::MARKER_PROPERTY;
use pretty_assertions::assert_eq;
use std::cell::Cell;
use std::rc::Rc;

fn marker(object: ExpressionNode) -> ExpressionNode {
    build::member(object, MARKER_PROPERTY)
}

fn mixed_program() -> ProgramNode {
    ProgramNode {
        statements: vec![
            // let x = a.b.ex;
            StatementNode::Let(Box::new(LetStatementNode {
                name: "x".to_string(),
                value: marker(build::member(build::identifier("a"), "b")),
            })),
            // a.b.ex.c.ex
            StatementNode::Expr(marker(build::member(
                marker(build::member(build::identifier("a"), "b")),
                "c",
            ))),
            // f(a.b.ex, a.fn.ex())
            StatementNode::Expr(build::call(
                build::identifier("f"),
                vec![
                    marker(build::member(build::identifier("a"), "b")),
                    build::call(
                        marker(build::member(build::identifier("a"), "fn")),
                        vec![],
                    ),
                ],
            )),
        ],
    }
}

#[test]
fn no_marker_survives_a_pass() {
    let mut program = mixed_program();
    let report = exis::lower_program(&mut program);
    assert!(report.rewrites >= 5);

    assert!(member_properties(&program)
        .iter()
        .all(|property| property != MARKER_PROPERTY));
}

#[test]
fn a_second_pass_changes_nothing() {
    let mut program = mixed_program();
    exis::lower_program(&mut program);

    let lowered = program.clone();
    let second = exis::lower_program(&mut program);
    assert_eq!(second.rewrites, 0);
    assert_eq!(program, lowered);
}

#[test]
fn guarded_objects_are_reevaluated_per_comparison() {
    // g().ex, where the guarded object is itself a call. The guard
    // duplicates the object expression into the typeof and null
    // comparisons, so the call runs once per comparison.
    let mut expr = marker(build::call(build::identifier("g"), vec![]));
    exis::lower_expression(&mut expr);

    let hits = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&hits);
    let mut env = Env::new();
    env.insert(
        "g",
        Value::function(move |_| {
            counter.set(counter.get() + 1);
            Ok(Value::object::<&str, _>([]))
        }),
    );

    assert_eq!(eval_expr(&env, &expr).unwrap(), Value::Bool(true));
    assert_eq!(hits.get(), 2);
}
