//! Existential-access lowering for a JavaScript-like expression language.
//!
//! The `obj.prop.ex` notation (and its call form `obj.method.ex(args)`)
//! tests presence: neither `undefined` nor `null`, and callable in the
//! call form, in a target language without optional chaining. Lowering
//! rewrites every marker access into an explicit guarded conditional.
//!
//! ```
//! use exis_ast::ast::ProgramNode;
//! use exis_ast::ast::StatementNode;
//! use exis_ast::build;
//!
//! // a.b.ex
//! let mut program = ProgramNode {
//!     statements: vec![StatementNode::Expr(build::member(
//!         build::member(build::identifier("a"), "b"),
//!         "ex",
//!     ))],
//! };
//!
//! let report = exis::lower_program(&mut program);
//! assert_eq!(report.rewrites, 1);
//!
//! // A second pass finds nothing left to do.
//! assert_eq!(exis::lower_program(&mut program).rewrites, 0);
//! ```

use exis_ast::ast::{ExpressionNode, ProgramNode};
use serde::Serialize;

pub use exis_lower::MARKER_PROPERTY;

/// Outcome of one lowering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoweringReport {
    /// Number of marker accesses rewritten. Zero on an already-lowered
    /// tree.
    pub rewrites: usize,
}

/// Lowers every marker access in `program`, in place.
pub fn lower_program(program: &mut ProgramNode) -> LoweringReport {
    LoweringReport {
        rewrites: exis_lower::lower_program(program),
    }
}

/// Lowers every marker access under a root-level expression, in place.
pub fn lower_expression(expr: &mut ExpressionNode) -> LoweringReport {
    LoweringReport {
        rewrites: exis_lower::lower_expression(expr),
    }
}
