//! Parser tests: grammar shape, precedence, associativity and syntax errors

mod common;

use calc_runtime::ast::{BinaryOp, Expr};
use calc_runtime::{parse, Span, SyntaxError, VersionedAst};
use common::{assert_eq, parse_err};
use rstest::rstest;

/// Render a tree with explicit grouping so its shape can be compared as text
fn shape(expr: &Expr) -> String {
    match expr {
        Expr::Literal(n, _) => n.to_string(),
        Expr::Variable(id) => id.name.clone(),
        Expr::Binary(b) => format!("({} {} {})", shape(&b.left), b.op, shape(&b.right)),
        Expr::Assign(a) => format!("{} = {}", a.target.name, shape(&a.value)),
    }
}

// ============================================================================
// Tree Shape
// ============================================================================

#[rstest]
#[case("7", "7")]
#[case("x", "x")]
#[case("2+3*4", "(2 + (3 * 4))")]
#[case("2*3+4", "((2 * 3) + 4)")]
#[case("10-3-2", "((10 - 3) - 2)")]
#[case("100/10/2", "((100 / 10) / 2)")]
#[case("a*b/c*d", "(((a * b) / c) * d)")]
#[case("1-2*3-4", "((1 - (2 * 3)) - 4)")]
#[case("1+2*3/4-5", "((1 + ((2 * 3) / 4)) - 5)")]
#[case("x=5", "x = 5")]
#[case("x=y+1", "x = (y + 1)")]
#[case("total=a*b+c", "total = ((a * b) + c)")]
#[case("v1=v2", "v1 = v2")]
fn test_tree_shape(#[case] source: &str, #[case] expected: &str) {
    let ast = parse(source).unwrap();
    assert_eq!(shape(&ast), expected);
}

#[rstest]
#[case("0042", 42)]
#[case("0", 0)]
#[case("9223372036854775807", i64::MAX)]
fn test_literals(#[case] source: &str, #[case] expected: i64) {
    assert!(matches!(parse(source).unwrap(), Expr::Literal(n, _) if n == expected));
}

#[test]
fn test_spans_cover_source() {
    let ast = parse("abc=12*d").unwrap();
    assert_eq!(ast.span(), Span::new(0, 8));
    let Expr::Assign(assign) = ast else {
        panic!("expected assignment");
    };
    assert_eq!(assign.target.span, Span::new(0, 3));
    assert_eq!(assign.value.span(), Span::new(4, 8));
}

#[test]
fn test_render_reproduces_parser_output() {
    for source in ["1+2*3", "x=y-4/2", "a", "10-3-2", "007+1"] {
        let rendered = parse(source).unwrap().to_string();
        let reparsed = parse(&rendered).unwrap();
        assert_eq!(reparsed.to_string(), rendered);
    }
    assert_eq!(parse("007+1").unwrap().to_string(), "7+1");
}

// ============================================================================
// Syntax Errors
// ============================================================================

#[rstest]
#[case("2=3", "2")]
#[case("1+x=3", "1+x")]
#[case("a*b=c", "a*b")]
fn test_invalid_assignment_target(#[case] source: &str, #[case] target: &str) {
    match parse_err(source) {
        SyntaxError::InvalidAssignmentTarget { target: t, .. } => assert_eq!(t, target),
        other => panic!("expected InvalidAssignmentTarget, got {:?}", other),
    }
}

#[rstest]
#[case("2 + 3", ' ', 1)]
#[case("(1+2)", '(', 0)]
#[case("1+2)", ')', 3)]
#[case("x=y=1", '=', 3)]
#[case("+1", '+', 0)]
#[case("=1", '=', 0)]
#[case("5%2", '%', 1)]
#[case("1.5", '.', 1)]
#[case("1\n2", '\n', 1)]
#[case("é", 'é', 0)]
fn test_unexpected_character(#[case] source: &str, #[case] found: char, #[case] start: usize) {
    assert_eq!(
        parse_err(source),
        SyntaxError::UnexpectedCharacter {
            found,
            span: Span::new(start, start + found.len_utf8()),
        }
    );
}

#[rstest]
#[case("", 0)]
#[case("\n", 0)]
#[case("1+", 2)]
#[case("x=", 2)]
#[case("3*\r\n", 2)]
fn test_unexpected_end(#[case] source: &str, #[case] at: usize) {
    assert_eq!(
        parse_err(source),
        SyntaxError::UnexpectedEnd {
            span: Span::new(at, at)
        }
    );
}

#[test]
fn test_errors_are_not_panics_for_arbitrary_garbage() {
    for source in ["", " ", "++", "==", "\t", "x y", "1e5", "-1", "ab-", "🙂"] {
        let _ = parse(source);
    }
}

#[test]
fn test_versioned_ast_dump() {
    let ast = VersionedAst::new(parse("x=1+2").unwrap());
    let json = ast.to_json().unwrap();
    assert!(json.contains("\"Assign\""));
    assert!(json.contains("\"Add\""));
    assert_eq!(VersionedAst::from_json(&json).unwrap(), ast);
    assert_eq!(ast.statement.to_string(), "x=1+2");
    assert!(matches!(ast.statement, Expr::Assign(ref a) if matches!(*a.value, Expr::Binary(ref b) if b.op == BinaryOp::Add)));
}
