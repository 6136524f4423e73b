//! REPL core logic (UI-agnostic)

use crate::ast::Expr;
use crate::diagnostic::Diagnostic;
use crate::environment::Environment;
use crate::interpreter::evaluate;
use crate::parser::parse;
use crate::value::Number;
use log::debug;

/// REPL result type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplResult {
    /// The value of the statement (None on error)
    pub value: Option<Number>,
    /// Variable written by the statement, if it was an assignment
    pub assigned: Option<String>,
    /// Diagnostics from parsing or evaluation
    pub diagnostics: Vec<Diagnostic>,
}

impl ReplResult {
    fn failed(diagnostic: Diagnostic) -> Self {
        Self {
            value: None,
            assigned: None,
            diagnostics: vec![diagnostic],
        }
    }

    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// A variable binding as shown by `:vars`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplBinding {
    pub name: String,
    pub value: Number,
}

/// REPL core state
///
/// Owns the session environment. Bindings persist across `eval_line` calls
/// and errors never reset them.
#[derive(Debug, Default)]
pub struct ReplCore {
    env: Environment,
}

impl ReplCore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate one line of input: parse, then evaluate against the session
    /// environment
    pub fn eval_line(&mut self, input: &str) -> ReplResult {
        let ast = match parse(input) {
            Ok(ast) => ast,
            Err(err) => {
                debug!("syntax error in {:?}: {}", input, err);
                return ReplResult::failed(Diagnostic::from_syntax_error(&err, input));
            }
        };

        let assigned = match &ast {
            Expr::Assign(assign) => Some(assign.target.name.clone()),
            _ => None,
        };

        match evaluate(&ast, &mut self.env) {
            Ok(value) => ReplResult {
                value: Some(value),
                assigned,
                diagnostics: Vec::new(),
            },
            Err(err) => {
                debug!("evaluation of {} failed: {}", ast, err);
                ReplResult::failed(Diagnostic::from_eval_error(&err, input))
            }
        }
    }

    /// Snapshot of all bindings in name order
    pub fn variables(&self) -> Vec<ReplBinding> {
        self.env
            .iter()
            .map(|(name, value)| ReplBinding {
                name: name.to_string(),
                value,
            })
            .collect()
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Clear all variables
    pub fn reset(&mut self) {
        self.env.clear();
    }
}
