//! Calc Runtime - Core calculator implementation
//!
//! This library provides the parsing-and-evaluation pipeline of the calculator:
//! - Lexical helpers and recursive-descent parsing into an AST
//! - Tree-walking evaluation against a mutable variable environment
//! - Diagnostics for every syntax and evaluation error
//! - A UI-agnostic REPL session
//!
//! The crate performs no I/O. A driver feeds it one line at a time.
//!
//! ```
//! use calc_runtime::{evaluate, parse, Environment};
//!
//! let mut env = Environment::new();
//! evaluate(&parse("x=5").unwrap(), &mut env).unwrap();
//! assert_eq!(evaluate(&parse("x*2+1").unwrap(), &mut env), Ok(11));
//! ```

/// Calc runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod ast;
pub mod diagnostic;
pub mod environment;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod span;
pub mod value;

// Re-export commonly used types
pub use ast::{BinaryOp, Expr, Identifier, VersionedAst};
pub use diagnostic::{error_codes, Diagnostic, DiagnosticLevel, DIAG_VERSION};
pub use environment::Environment;
pub use interpreter::{evaluate, Interpreter};
pub use parser::{parse, Parser, SyntaxError};
pub use repl::{ReplBinding, ReplCore, ReplResult};
pub use span::Span;
pub use value::{EvalError, Number};
