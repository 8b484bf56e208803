//! A small evaluator for the target language, used to state and test the
//! runtime behavior of lowered trees.
//!
//! Semantics follow the consuming language's rules where the lowering
//! relies on them: `typeof` of an unbound identifier is `"undefined"`
//! rather than an error, member access on a non-object (including
//! `undefined` and `null`) yields `undefined`, logical operators
//! short-circuit and return operand values, and strict equality never
//! coerces.

use std::collections::HashMap;

use exis_ast::ast::*;
use thiserror::Error;

use crate::value::Value;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),

    #[error("value of type {0} is not a function")]
    NotAFunction(&'static str),

    #[error("unsupported operands for {operator:?}: {left} and {right}")]
    TypeMismatch {
        operator: BinaryOperator,
        left: &'static str,
        right: &'static str,
    },

    #[error("unsupported operand for {operator:?}: {operand}")]
    UnaryMismatch {
        operator: UnaryOperator,
        operand: &'static str,
    },

    #[error("division by zero")]
    DivisionByZero,
}

/// Identifier bindings for one evaluation.
#[derive(Default)]
pub struct Env {
    bindings: HashMap<String, Value>,
}

impl Env {
    pub fn new() -> Self {
        Env::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }
}

/// Evaluates the statements of `program` in order. `let` binds into `env`;
/// `return` stops evaluation with its value. The result is the `return`
/// value, or the value of the last statement, or `undefined` for an empty
/// program.
pub fn eval_program(env: &mut Env, program: &ProgramNode) -> Result<Value, EvalError> {
    let mut last = Value::Undefined;
    for statement in &program.statements {
        match statement {
            StatementNode::Expr(expr) => {
                last = eval_expr(env, expr)?;
            }
            StatementNode::Let(stmt) => {
                let value = eval_expr(env, &stmt.value)?;
                env.insert(stmt.name.clone(), value);
                last = Value::Undefined;
            }
            StatementNode::Return(stmt) => {
                return match &stmt.value {
                    Some(expr) => eval_expr(env, expr),
                    None => Ok(Value::Undefined),
                };
            }
        }
    }
    Ok(last)
}

pub fn eval_expr(env: &Env, expr: &ExpressionNode) -> Result<Value, EvalError> {
    match expr {
        ExpressionNode::Identifier(id) => env
            .get(&id.name)
            .cloned()
            .ok_or_else(|| EvalError::UnknownIdentifier(id.name.clone())),
        ExpressionNode::Literal(lit) => Ok(eval_literal(lit)),
        ExpressionNode::Unary(unary) => eval_unary(env, unary),
        ExpressionNode::Binary(binary) => {
            let left = eval_expr(env, &binary.left)?;
            let right = eval_expr(env, &binary.right)?;
            eval_binary(binary.operator, left, right)
        }
        ExpressionNode::Logical(logical) => {
            let left = eval_expr(env, &logical.left)?;
            match logical.operator {
                LogicalOperator::And if !left.is_truthy() => Ok(left),
                LogicalOperator::Or if left.is_truthy() => Ok(left),
                _ => eval_expr(env, &logical.right),
            }
        }
        ExpressionNode::Conditional(cond) => {
            if eval_expr(env, &cond.test)?.is_truthy() {
                eval_expr(env, &cond.consequent)
            } else {
                eval_expr(env, &cond.alternate)
            }
        }
        ExpressionNode::Call(call) => {
            let callee = eval_expr(env, &call.callee)?;
            let function = match callee {
                Value::Function(f) => f,
                other => return Err(EvalError::NotAFunction(other.type_of())),
            };
            let mut arguments = Vec::with_capacity(call.arguments.len());
            for argument in &call.arguments {
                arguments.push(eval_expr(env, argument)?);
            }
            function.call(&arguments)
        }
        ExpressionNode::Member(member) => {
            let object = eval_expr(env, &member.object)?;
            Ok(read_property(&object, &member.property))
        }
    }
}

fn eval_literal(lit: &LiteralNode) -> Value {
    match lit {
        LiteralNode::Int(n) => Value::Int(*n),
        LiteralNode::Float(x) => Value::Float(*x),
        LiteralNode::Bool(b) => Value::Bool(*b),
        LiteralNode::String(s) => Value::Str(s.clone()),
        LiteralNode::Null => Value::Null,
    }
}

/// Property reads never fail: objects yield the stored value or
/// `undefined`, every other value (nullish ones included) yields
/// `undefined`. The lowered failure value `void 0` relies on this when a
/// chain continues past a failed check.
fn read_property(object: &Value, property: &str) -> Value {
    match object {
        Value::Object(map) => map.get(property).cloned().unwrap_or(Value::Undefined),
        _ => Value::Undefined,
    }
}

fn eval_unary(env: &Env, unary: &UnaryExpressionNode) -> Result<Value, EvalError> {
    match unary.operator {
        UnaryOperator::TypeOf => {
            // `typeof` tolerates an unbound identifier operand.
            if let ExpressionNode::Identifier(id) = &unary.operand {
                if env.get(&id.name).is_none() {
                    return Ok(Value::Str("undefined".to_string()));
                }
            }
            let value = eval_expr(env, &unary.operand)?;
            Ok(Value::Str(value.type_of().to_string()))
        }
        UnaryOperator::Void => {
            eval_expr(env, &unary.operand)?;
            Ok(Value::Undefined)
        }
        UnaryOperator::Not => {
            let value = eval_expr(env, &unary.operand)?;
            Ok(Value::Bool(!value.is_truthy()))
        }
        UnaryOperator::Neg => {
            let value = eval_expr(env, &unary.operand)?;
            match value {
                Value::Int(n) => Ok(Value::Int(-n)),
                Value::Float(x) => Ok(Value::Float(-x)),
                other => Err(EvalError::UnaryMismatch {
                    operator: UnaryOperator::Neg,
                    operand: other.type_of(),
                }),
            }
        }
    }
}

fn eval_binary(operator: BinaryOperator, left: Value, right: Value) -> Result<Value, EvalError> {
    match operator {
        BinaryOperator::StrictEq => Ok(Value::Bool(left == right)),
        BinaryOperator::StrictNe => Ok(Value::Bool(left != right)),
        // Loose equality only adds the mutual nullish case on this value
        // set; no other coercions exist here.
        BinaryOperator::Eq => Ok(Value::Bool(
            (left.is_nullish() && right.is_nullish()) || left == right,
        )),
        BinaryOperator::Ne => Ok(Value::Bool(
            !((left.is_nullish() && right.is_nullish()) || left == right),
        )),
        BinaryOperator::Lt => eval_cmp(operator, left, right, |a, b| a < b),
        BinaryOperator::Le => eval_cmp(operator, left, right, |a, b| a <= b),
        BinaryOperator::Gt => eval_cmp(operator, left, right, |a, b| a > b),
        BinaryOperator::Ge => eval_cmp(operator, left, right, |a, b| a >= b),
        BinaryOperator::Add => match (left, right) {
            (Value::Str(a), Value::Str(b)) => Ok(Value::Str(a + &b)),
            (left, right) => eval_arith(operator, left, right),
        },
        BinaryOperator::Sub | BinaryOperator::Mul => eval_arith(operator, left, right),
        BinaryOperator::Div | BinaryOperator::Mod => {
            if right.as_number() == Some(0.0) {
                return Err(EvalError::DivisionByZero);
            }
            eval_arith(operator, left, right)
        }
    }
}

fn eval_cmp(
    operator: BinaryOperator,
    left: Value,
    right: Value,
    f: impl Fn(f64, f64) -> bool,
) -> Result<Value, EvalError> {
    match (left.as_number(), right.as_number()) {
        (Some(a), Some(b)) => Ok(Value::Bool(f(a, b))),
        _ => Err(EvalError::TypeMismatch {
            operator,
            left: left.type_of(),
            right: right.type_of(),
        }),
    }
}

fn eval_arith(operator: BinaryOperator, left: Value, right: Value) -> Result<Value, EvalError> {
    if let (Value::Int(a), Value::Int(b)) = (&left, &right) {
        let result = match operator {
            BinaryOperator::Add => a.wrapping_add(*b),
            BinaryOperator::Sub => a.wrapping_sub(*b),
            BinaryOperator::Mul => a.wrapping_mul(*b),
            BinaryOperator::Div => a / b,
            BinaryOperator::Mod => a % b,
            _ => unreachable!("eval_arith only receives arithmetic operators"),
        };
        return Ok(Value::Int(result));
    }

    match (left.as_number(), right.as_number()) {
        (Some(a), Some(b)) => {
            let result = match operator {
                BinaryOperator::Add => a + b,
                BinaryOperator::Sub => a - b,
                BinaryOperator::Mul => a * b,
                BinaryOperator::Div => a / b,
                BinaryOperator::Mod => a % b,
                _ => unreachable!("eval_arith only receives arithmetic operators"),
            };
            Ok(Value::Float(result))
        }
        _ => Err(EvalError::TypeMismatch {
            operator,
            left: left.type_of(),
            right: right.type_of(),
        }),
    }
}
