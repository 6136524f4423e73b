//! Runtime values and evaluation errors

use crate::ast::BinaryOp;
use crate::span::Span;
use thiserror::Error;

/// The only runtime value: a signed 64-bit integer
pub type Number = i64;

/// Evaluation error
///
/// Every variant is recoverable. The environment is left untouched when one
/// is returned from an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A variable was read before any assignment in this session
    #[error("unbound variable `{name}`")]
    UnboundVariable { name: String, span: Span },
    /// Right operand of `/` evaluated to zero
    #[error("division by zero")]
    DivisionByZero { span: Span },
    /// The result does not fit in a 64-bit signed integer
    #[error("arithmetic overflow: {left} {op} {right}")]
    Overflow {
        op: BinaryOp,
        left: Number,
        right: Number,
        span: Span,
    },
}

impl EvalError {
    /// Get the source span for this error
    pub fn span(&self) -> Span {
        match self {
            EvalError::UnboundVariable { span, .. } => *span,
            EvalError::DivisionByZero { span } => *span,
            EvalError::Overflow { span, .. } => *span,
        }
    }
}
