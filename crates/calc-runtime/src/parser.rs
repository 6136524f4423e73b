//! Parsing (text to AST)
//!
//! Recursive descent over the raw line, one method per nonterminal:
//!
//! ```text
//! statement  → expression ( '=' expression )?
//! expression → term ( ( '+' | '-' ) term )*
//! term       → factor ( ( '*' | '/' ) factor )*
//! factor     → number | identifier
//! ```
//!
//! Each method consumes a prefix of the remaining input. A missing operator
//! ends the current nonterminal instead of being an error, so the line
//! terminator (or the end of input) closes the statement. Anything else left
//! over after the statement is rejected.

use crate::ast::{Expr, Identifier};
use crate::lexer::{self, CharClass};
use crate::span::Span;
use log::trace;
use thiserror::Error;

/// Syntax error produced while parsing a line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A character that cannot start or continue the statement here
    #[error("unexpected character {found:?}")]
    UnexpectedCharacter { found: char, span: Span },
    /// The line ended where a number or variable was required
    #[error("unexpected end of input")]
    UnexpectedEnd { span: Span },
    /// Integer literal outside the 64-bit signed range
    #[error("integer literal `{literal}` is too large")]
    NumberTooLarge { literal: String, span: Span },
    /// Left-hand side of `=` is not a bare variable
    #[error("invalid assignment target `{target}`")]
    InvalidAssignmentTarget { target: String, span: Span },
}

impl SyntaxError {
    /// Get the source span for this error
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::UnexpectedCharacter { span, .. } => *span,
            SyntaxError::UnexpectedEnd { span } => *span,
            SyntaxError::NumberTooLarge { span, .. } => *span,
            SyntaxError::InvalidAssignmentTarget { span, .. } => *span,
        }
    }
}

/// Parse one line into a statement
pub fn parse(line: &str) -> Result<Expr, SyntaxError> {
    Parser::new(line).parse()
}

/// Parser state: the full line and its unconsumed tail
pub struct Parser<'src> {
    source: &'src str,
    rest: &'src str,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
        }
    }

    /// Parse the whole line as exactly one statement
    pub fn parse(mut self) -> Result<Expr, SyntaxError> {
        let statement = self.parse_statement()?;
        if !lexer::is_line_end(self.rest) {
            return Err(self.unexpected());
        }
        trace!("parsed {:?} as {}", self.source, statement);
        Ok(statement)
    }

    /// Byte offset of the unconsumed input within the line
    fn pos(&self) -> usize {
        self.source.len() - self.rest.len()
    }

    fn peek(&self) -> CharClass {
        lexer::classify(self.rest)
    }

    /// Consume a single ASCII operator byte
    fn bump(&mut self) {
        self.rest = &self.rest[1..];
    }

    /// Error for whatever sits at the current position
    fn unexpected(&self) -> SyntaxError {
        let pos = self.pos();
        match self.rest.chars().next() {
            Some(found) if !lexer::is_line_end(self.rest) => SyntaxError::UnexpectedCharacter {
                found,
                span: Span::new(pos, pos + found.len_utf8()),
            },
            _ => SyntaxError::UnexpectedEnd {
                span: Span::new(pos, pos),
            },
        }
    }

    /// statement → expression ( '=' expression )?
    fn parse_statement(&mut self) -> Result<Expr, SyntaxError> {
        let expr = self.parse_expression()?;
        if self.peek() != CharClass::Equals {
            return Ok(expr);
        }

        let target = match expr {
            Expr::Variable(id) => id,
            other => {
                return Err(SyntaxError::InvalidAssignmentTarget {
                    target: other.to_string(),
                    span: other.span(),
                })
            }
        };

        self.bump();
        let value = self.parse_expression()?;
        Ok(Expr::assign(target, value))
    }

    /// expression → term ( ( '+' | '-' ) term )*
    fn parse_expression(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.parse_term()?;

        while let CharClass::Operator(op) = self.peek() {
            if !op.is_additive() {
                break;
            }
            self.bump();
            let right = self.parse_term()?;
            expr = Expr::binary(op, expr, right);
        }

        Ok(expr)
    }

    /// term → factor ( ( '*' | '/' ) factor )*
    fn parse_term(&mut self) -> Result<Expr, SyntaxError> {
        let mut term = self.parse_factor()?;

        while let CharClass::Operator(op) = self.peek() {
            if !op.is_multiplicative() {
                break;
            }
            self.bump();
            let right = self.parse_factor()?;
            term = Expr::binary(op, term, right);
        }

        Ok(term)
    }

    /// factor → number | identifier
    fn parse_factor(&mut self) -> Result<Expr, SyntaxError> {
        let start = self.pos();

        match self.peek() {
            CharClass::Letter => {
                let (name, rest) = lexer::scan_identifier(self.rest);
                self.rest = rest;
                Ok(Expr::Variable(Identifier {
                    name: name.to_string(),
                    span: Span::new(start, self.pos()),
                }))
            }
            CharClass::Digit => match lexer::scan_number(self.rest) {
                Some((value, rest)) => {
                    self.rest = rest;
                    Ok(Expr::Literal(value, Span::new(start, self.pos())))
                }
                None => {
                    let (digits, _) = lexer::split_run(self.rest, lexer::is_digit);
                    Err(SyntaxError::NumberTooLarge {
                        literal: digits.to_string(),
                        span: Span::new(start, start + digits.len()),
                    })
                }
            },
            _ => Err(self.unexpected()),
        }
    }
}
