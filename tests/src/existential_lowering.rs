//! End-to-end behavior of lowered existential accesses.

use exis_ast::ast::{ExpressionNode, LetStatementNode, ProgramNode, ReturnNode, StatementNode};
use exis_ast::build;
use exis_eval::{eval_expr, eval_program, Env, EvalError, Value};
use exis_lower::MARKER_PROPERTY;
use pretty_assertions::assert_eq;
use std::cell::Cell;
use std::rc::Rc;

fn a_b_marker() -> ExpressionNode {
    build::member(
        build::member(build::identifier("a"), "b"),
        MARKER_PROPERTY,
    )
}

fn lowered(mut expr: ExpressionNode) -> ExpressionNode {
    exis::lower_expression(&mut expr);
    expr
}

fn env_with_a(b: Value) -> Env {
    let mut env = Env::new();
    env.insert("a", Value::object([("b", b)]));
    env
}

#[test]
fn absent_object_checks_false() {
    let expr = lowered(a_b_marker());

    // a has no b at all
    let mut env = Env::new();
    env.insert("a", Value::object::<&str, _>([]));
    assert_eq!(eval_expr(&env, &expr).unwrap(), Value::Bool(false));

    // a.b is null
    let env = env_with_a(Value::Null);
    assert_eq!(eval_expr(&env, &expr).unwrap(), Value::Bool(false));
}

#[test]
fn present_object_checks_true() {
    let expr = lowered(a_b_marker());
    let env = env_with_a(Value::object::<&str, _>([]));
    assert_eq!(eval_expr(&env, &expr).unwrap(), Value::Bool(true));
}

#[test]
fn falsy_values_still_count_as_present() {
    let expr = lowered(a_b_marker());
    for present in [
        Value::Bool(false),
        Value::Int(0),
        Value::Str(String::new()),
    ] {
        let env = env_with_a(present);
        assert_eq!(eval_expr(&env, &expr).unwrap(), Value::Bool(true));
    }
}

#[test]
fn chained_access_flows_the_object_through() {
    // a.b.ex.c
    let expr = lowered(build::member(a_b_marker(), "c"));

    let env = env_with_a(Value::object([("c", Value::Int(42))]));
    assert_eq!(eval_expr(&env, &expr).unwrap(), Value::Int(42));
}

#[test]
fn chained_access_on_absent_object_yields_undefined() {
    // a.b.ex.c with a.b null: the failed check produces void 0, and the
    // trailing .c reads off it without crashing.
    let expr = lowered(build::member(a_b_marker(), "c"));

    let env = env_with_a(Value::Null);
    assert_eq!(eval_expr(&env, &expr).unwrap(), Value::Undefined);
}

#[test]
fn chained_markers_compose() {
    // a.b.ex.c.ex
    let expr = lowered(build::member(
        build::member(a_b_marker(), "c"),
        MARKER_PROPERTY,
    ));

    let env = env_with_a(Value::Null);
    assert_eq!(eval_expr(&env, &expr).unwrap(), Value::Bool(false));

    let env = env_with_a(Value::object::<&str, _>([]));
    assert_eq!(eval_expr(&env, &expr).unwrap(), Value::Bool(false));

    let env = env_with_a(Value::object([("c", Value::object::<&str, _>([]))]));
    assert_eq!(eval_expr(&env, &expr).unwrap(), Value::Bool(true));
}

fn call_marker(arguments: Vec<ExpressionNode>) -> ExpressionNode {
    // a.fn.ex(arguments)
    build::call(
        build::member(
            build::member(build::identifier("a"), "fn"),
            MARKER_PROPERTY,
        ),
        arguments,
    )
}

#[test]
fn present_function_is_called_with_the_original_arguments() {
    let expr = lowered(call_marker(vec![build::int(2), build::int(3)]));

    let hits = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&hits);
    let mut env = Env::new();
    env.insert(
        "a",
        Value::object([(
            "fn",
            Value::function(move |args| {
                counter.set(counter.get() + 1);
                match (&args[0], &args[1]) {
                    (Value::Int(x), Value::Int(y)) => Ok(Value::Int(x + y)),
                    _ => Ok(Value::Undefined),
                }
            }),
        )]),
    );

    assert_eq!(eval_expr(&env, &expr).unwrap(), Value::Int(5));
    assert_eq!(hits.get(), 1);
}

#[test]
fn non_function_callee_is_never_invoked() {
    let marker = call_marker(vec![]);

    let mut env = Env::new();
    env.insert("a", Value::object([("fn", Value::Int(3))]));

    // Without the rewrite the call is attempted and fails.
    assert!(matches!(
        eval_expr(&env, &marker),
        Err(EvalError::NotAFunction(_))
    ));

    // Lowered, the guard rejects the non-callable value instead.
    let expr = lowered(marker);
    assert_eq!(eval_expr(&env, &expr).unwrap(), Value::Bool(false));
}

#[test]
fn missing_callee_checks_false() {
    let expr = lowered(call_marker(vec![]));
    let mut env = Env::new();
    env.insert("a", Value::object::<&str, _>([]));
    assert_eq!(eval_expr(&env, &expr).unwrap(), Value::Bool(false));
}

#[test]
fn chained_call_marker_flows_and_fails_to_undefined() {
    // a.fn.ex().c
    let expr = lowered(build::member(call_marker(vec![]), "c"));

    let mut env = Env::new();
    env.insert(
        "a",
        Value::object([(
            "fn",
            Value::function(|_| Ok(Value::object([("c", Value::Int(9))]))),
        )]),
    );
    assert_eq!(eval_expr(&env, &expr).unwrap(), Value::Int(9));

    let mut env = Env::new();
    env.insert("a", Value::object::<&str, _>([]));
    assert_eq!(eval_expr(&env, &expr).unwrap(), Value::Undefined);
}

#[test]
fn lowered_programs_evaluate_end_to_end() {
    // let present = a.b.ex; return present
    let mut program = ProgramNode {
        statements: vec![
            StatementNode::Let(Box::new(LetStatementNode {
                name: "present".to_string(),
                value: a_b_marker(),
            })),
            StatementNode::Return(Box::new(ReturnNode {
                value: Some(build::identifier("present")),
            })),
        ],
    };
    let report = exis::lower_program(&mut program);
    assert_eq!(report.rewrites, 1);

    let mut env = env_with_a(Value::object::<&str, _>([]));
    assert_eq!(
        eval_program(&mut env, &program).unwrap(),
        Value::Bool(true)
    );

    let mut env = env_with_a(Value::Null);
    assert_eq!(
        eval_program(&mut env, &program).unwrap(),
        Value::Bool(false)
    );
}
