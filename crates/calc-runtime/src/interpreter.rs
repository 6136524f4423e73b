//! AST interpreter (tree-walking)
//!
//! Evaluates one statement against a borrowed environment. The tree is only
//! read; the environment is written only when an assignment's value has been
//! computed successfully.

use crate::ast::{AssignExpr, BinaryExpr, BinaryOp, Expr};
use crate::environment::Environment;
use crate::span::Span;
use crate::value::{EvalError, Number};
use log::debug;

/// Evaluate `expr`, applying any assignment to `env`
pub fn evaluate(expr: &Expr, env: &mut Environment) -> Result<Number, EvalError> {
    Interpreter::new(env).eval_expr(expr)
}

/// Interpreter borrowing the session environment for one evaluation
pub struct Interpreter<'env> {
    env: &'env mut Environment,
}

impl<'env> Interpreter<'env> {
    pub fn new(env: &'env mut Environment) -> Self {
        Self { env }
    }

    /// Evaluate an expression
    pub fn eval_expr(&mut self, expr: &Expr) -> Result<Number, EvalError> {
        match expr {
            Expr::Literal(n, _) => Ok(*n),
            Expr::Variable(id) => {
                self.env
                    .get(&id.name)
                    .ok_or_else(|| EvalError::UnboundVariable {
                        name: id.name.clone(),
                        span: id.span,
                    })
            }
            Expr::Binary(binary) => self.eval_binary(binary),
            Expr::Assign(assign) => self.eval_assign(assign),
        }
    }

    /// Left operand first, then right
    fn eval_binary(&mut self, binary: &BinaryExpr) -> Result<Number, EvalError> {
        let left = self.eval_expr(&binary.left)?;
        let right = self.eval_expr(&binary.right)?;
        apply(binary.op, left, right, binary.span)
    }

    fn eval_assign(&mut self, assign: &AssignExpr) -> Result<Number, EvalError> {
        let value = self.eval_expr(&assign.value)?;
        let previous = self.env.set(assign.target.name.clone(), value);
        debug!(
            "bound {} = {} (was {:?})",
            assign.target.name, value, previous
        );
        Ok(value)
    }
}

/// Checked integer arithmetic; division truncates toward zero
fn apply(op: BinaryOp, left: Number, right: Number, span: Span) -> Result<Number, EvalError> {
    let result = match op {
        BinaryOp::Add => left.checked_add(right),
        BinaryOp::Sub => left.checked_sub(right),
        BinaryOp::Mul => left.checked_mul(right),
        BinaryOp::Div => {
            if right == 0 {
                return Err(EvalError::DivisionByZero { span });
            }
            left.checked_div(right)
        }
    };

    result.ok_or(EvalError::Overflow {
        op,
        left,
        right,
        span,
    })
}
