//! Lowering of existential-access markers into guarded conditionals.
//!
//! The notation `obj.prop.ex` (and its call form `obj.method.ex(args)`)
//! asks whether a value is present: neither `undefined` nor `null`, and
//! callable in the call form, in a target language without native
//! optional chaining. This crate rewrites each marker access into a plain
//! ternary conditional:
//!
//! * terminal access: `typeof obj.prop !== "undefined" && obj.prop !== null
//!   ? true : false`
//! * chained access: the same guard, with the object flowing through on
//!   success and `void 0` on failure
//! * call access: the guard additionally requires
//!   `typeof obj.method === "function"`, and on success rebuilds the call
//!
//! The guarded object expression is duplicated into each guard comparison
//! and the success branch; side effects in it run once per copy.

pub mod branch;
pub mod classify;
pub mod guard;
pub mod rewrite;

/// The property name that triggers the rewrite. Never present in output.
pub const MARKER_PROPERTY: &str = "ex";

pub use rewrite::{lower_expression, lower_program};
