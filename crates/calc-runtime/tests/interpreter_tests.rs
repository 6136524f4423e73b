//! Evaluator tests: arithmetic, variables, assignment and evaluation errors

mod common;

use calc_runtime::ast::{BinaryOp, Expr, Identifier};
use calc_runtime::{evaluate, parse, Environment, EvalError, Span};
use common::{assert_eq, assert_eval_number, eval_err, eval_in};
use rstest::rstest;

// ============================================================================
// Arithmetic
// ============================================================================

#[rstest]
#[case("2+3*4", 14)]
#[case("2*3+4", 10)]
#[case("10-3-2", 5)]
#[case("100/10/2", 5)]
#[case("8/3", 2)]
#[case("1-5", -4)]
#[case("0-7/2", -3)]
#[case("2*2*2*2*2", 32)]
#[case("1+2*3-4/2", 5)]
#[case("007", 7)]
#[case("9223372036854775807", i64::MAX)]
fn test_arithmetic(#[case] source: &str, #[case] expected: i64) {
    assert_eval_number(source, expected);
}

#[rstest]
#[case("5/0")]
#[case("1+2/0")]
#[case("7/0*3")]
fn test_division_by_zero(#[case] source: &str) {
    assert!(matches!(eval_err(source), EvalError::DivisionByZero { .. }));
}

#[rstest]
#[case("9223372036854775807+1", BinaryOp::Add)]
#[case("0-9223372036854775807-2", BinaryOp::Sub)]
#[case("4611686018427387904*2", BinaryOp::Mul)]
fn test_overflow_is_reported(#[case] source: &str, #[case] op: BinaryOp) {
    match eval_err(source) {
        EvalError::Overflow { op: actual, .. } => assert_eq!(actual, op),
        other => panic!("expected overflow, got {:?}", other),
    }
}

// ============================================================================
// Variables and Assignment
// ============================================================================

#[test]
fn test_assignment_persists() {
    let mut env = Environment::new();
    assert_eq!(eval_in(&mut env, "x=5"), Ok(5));
    assert_eq!(eval_in(&mut env, "x+1"), Ok(6));
    assert_eq!(env.get("x"), Some(5));
}

#[test]
fn test_reassignment_overwrites() {
    let mut env = Environment::new();
    eval_in(&mut env, "n=1").unwrap();
    eval_in(&mut env, "n=n+1").unwrap();
    eval_in(&mut env, "n=n*10").unwrap();
    assert_eq!(env.get("n"), Some(20));
    assert_eq!(env.len(), 1);
}

#[test]
fn test_unbound_variable() {
    let mut env = Environment::new();
    assert_eq!(
        eval_in(&mut env, "y+1"),
        Err(EvalError::UnboundVariable {
            name: "y".to_string(),
            span: Span::new(0, 1),
        })
    );
}

#[test]
fn test_names_are_case_sensitive() {
    let mut env = Environment::new();
    eval_in(&mut env, "abc=1").unwrap();
    assert!(matches!(
        eval_in(&mut env, "ABC"),
        Err(EvalError::UnboundVariable { ref name, .. }) if name == "ABC"
    ));
}

#[test]
fn test_errors_do_not_mutate_environment() {
    let mut env = Environment::new();
    eval_in(&mut env, "x=10").unwrap();
    let before = env.clone();
    assert!(eval_in(&mut env, "x=x/0").is_err());
    assert!(eval_in(&mut env, "y=missing").is_err());
    assert!(eval_in(&mut env, "x=9223372036854775807*x").is_err());
    assert_eq!(env, before);
}

// ============================================================================
// Read-only Evaluation
// ============================================================================

#[test]
fn test_re_evaluating_leaf_nodes_is_stable() {
    let mut env = Environment::new();
    env.set("x", 3);

    let literal = Expr::Literal(11, Span::new(0, 2));
    let variable = Expr::Variable(Identifier {
        name: "x".to_string(),
        span: Span::new(0, 1),
    });

    for node in [&literal, &variable] {
        let before = env.clone();
        let first = evaluate(node, &mut env);
        let second = evaluate(node, &mut env);
        assert_eq!(first, second);
        assert_eq!(env, before);
    }
}

#[test]
fn test_evaluation_does_not_mutate_tree() {
    let mut env = Environment::new();
    let ast = parse("z=2*3").unwrap();
    let snapshot = ast.clone();
    assert_eq!(evaluate(&ast, &mut env), Ok(6));
    assert_eq!(evaluate(&ast, &mut env), Ok(6));
    assert_eq!(ast, snapshot);
}

#[test]
fn test_hand_built_tree() {
    // (1+2)*3 cannot be written in the grammar but can be evaluated
    let sum = Expr::binary(
        BinaryOp::Add,
        Expr::Literal(1, Span::new(0, 1)),
        Expr::Literal(2, Span::new(2, 3)),
    );
    let product = Expr::binary(BinaryOp::Mul, sum, Expr::Literal(3, Span::new(4, 5)));
    assert_eq!(evaluate(&product, &mut Environment::new()), Ok(9));
}
