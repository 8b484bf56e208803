//! Evaluator for the JavaScript-like target language.
//!
//! Exists so the behavior of lowered trees can be stated and tested
//! against actual runtime values rather than only against tree shapes.

pub mod eval;
pub mod value;

pub use eval::{eval_expr, eval_program, Env, EvalError};
pub use value::{NativeFunction, Value};
