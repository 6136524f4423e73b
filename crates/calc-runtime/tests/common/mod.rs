//! Shared test utilities
#![allow(dead_code)]

use calc_runtime::{evaluate, parse, Environment, EvalError, Number, SyntaxError};

pub use pretty_assertions::{assert_eq, assert_ne};

/// Parse and evaluate `source` against `env`, panicking on a syntax error
pub fn eval_in(env: &mut Environment, source: &str) -> Result<Number, EvalError> {
    let ast = parse(source).unwrap_or_else(|e| panic!("failed to parse {:?}: {}", source, e));
    evaluate(&ast, env)
}

/// Assert that `source` evaluates to `expected` in a fresh environment
///
/// # Example
/// ```
/// assert_eval_number("1+2", 3);
/// ```
pub fn assert_eval_number(source: &str, expected: Number) {
    let mut env = Environment::new();
    match eval_in(&mut env, source) {
        Ok(n) => assert_eq!(n, expected, "Expected {} for {:?}, got {}", expected, source, n),
        Err(e) => panic!("Expected {} for {:?}, got error {:?}", expected, source, e),
    }
}

/// Assert that `source` fails to evaluate in a fresh environment
pub fn eval_err(source: &str) -> EvalError {
    let mut env = Environment::new();
    match eval_in(&mut env, source) {
        Err(e) => e,
        Ok(n) => panic!("Expected error for {:?}, got {}", source, n),
    }
}

/// Assert that `source` is rejected by the parser
pub fn parse_err(source: &str) -> SyntaxError {
    match parse(source) {
        Err(e) => e,
        Ok(ast) => panic!("Expected syntax error for {:?}, parsed as {}", source, ast),
    }
}
