//! Abstract Syntax Tree (AST) definitions
//!
//! One statement parses into one [`Expr`]. The tree is built once by the
//! parser and only ever read afterwards; evaluation mutates the environment,
//! never the tree.

use crate::span::Span;
use crate::value::Number;
use serde::{Deserialize, Serialize};
use std::fmt;

/// AST schema version
///
/// Included in JSON dumps. Increment when making breaking changes to the
/// AST structure.
pub const AST_VERSION: u32 = 1;

/// Versioned AST wrapper for JSON serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionedAst {
    /// AST schema version
    pub ast_version: u32,
    /// The parsed statement
    pub statement: Expr,
}

impl VersionedAst {
    pub fn new(statement: Expr) -> Self {
        Self {
            ast_version: AST_VERSION,
            statement,
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<Expr> for VersionedAst {
    fn from(statement: Expr) -> Self {
        Self::new(statement)
    }
}

/// Arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Map an operator byte to its operator
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'+' => Some(BinaryOp::Add),
            b'-' => Some(BinaryOp::Sub),
            b'*' => Some(BinaryOp::Mul),
            b'/' => Some(BinaryOp::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }

    /// `+` and `-` bind at expression level
    pub fn is_additive(self) -> bool {
        matches!(self, BinaryOp::Add | BinaryOp::Sub)
    }

    /// `*` and `/` bind at term level
    pub fn is_multiplicative(self) -> bool {
        matches!(self, BinaryOp::Mul | BinaryOp::Div)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Variable name with the location it was written at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

/// Binary operation: `left op right`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Assignment: `target = value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignExpr {
    pub target: Identifier,
    pub value: Box<Expr>,
    pub span: Span,
}

/// Statement node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    Literal(Number, Span),
    Variable(Identifier),
    Binary(BinaryExpr),
    Assign(AssignExpr),
}

impl Expr {
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        let span = left.span().merge(right.span());
        Expr::Binary(BinaryExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
            span,
        })
    }

    pub fn assign(target: Identifier, value: Expr) -> Self {
        let span = target.span.merge(value.span());
        Expr::Assign(AssignExpr {
            target,
            value: Box::new(value),
            span,
        })
    }

    pub fn span(&self) -> Span {
        match self {
            Expr::Literal(_, span) => *span,
            Expr::Variable(id) => id.span,
            Expr::Binary(binary) => binary.span,
            Expr::Assign(assign) => assign.span,
        }
    }
}

/// Renders the statement in the calculator's own syntax, without whitespace.
///
/// The grammar has no parentheses, so only trees shaped like parser output
/// (left-deep chains, tighter operators below looser ones) render back to
/// text with the same meaning.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(n, _) => write!(f, "{}", n),
            Expr::Variable(id) => write!(f, "{}", id.name),
            Expr::Binary(binary) => write!(f, "{}{}{}", binary.left, binary.op, binary.right),
            Expr::Assign(assign) => write!(f, "{}={}", assign.target.name, assign.value),
        }
    }
}
