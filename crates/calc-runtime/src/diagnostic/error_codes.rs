//! Error code registry with descriptions and help text
//!
//! Ranges:
//! - CALC1xxx: Syntax errors
//! - CALC2xxx: Evaluation errors

// CALC1xxx - Syntax Errors
pub const UNEXPECTED_CHARACTER: &str = "CALC1001";
pub const UNEXPECTED_END: &str = "CALC1002";
pub const NUMBER_TOO_LARGE: &str = "CALC1003";
pub const INVALID_ASSIGNMENT_TARGET: &str = "CALC1004";

// CALC2xxx - Evaluation Errors
pub const UNBOUND_VARIABLE: &str = "CALC2001";
pub const DIVISION_BY_ZERO: &str = "CALC2002";
pub const ARITHMETIC_OVERFLOW: &str = "CALC2003";

/// Error code descriptor with code, description, and optional help text
#[derive(Debug, Clone)]
pub struct ErrorCodeInfo {
    pub code: &'static str,
    pub description: &'static str,
    pub help: Option<&'static str>,
}

/// Get info for an error code, if known
pub fn lookup(code: &str) -> Option<ErrorCodeInfo> {
    ERROR_CODES.iter().find(|e| e.code == code).cloned()
}

/// Get help text for an error code
pub fn help_for(code: &str) -> Option<&'static str> {
    lookup(code).and_then(|e| e.help)
}

/// Get description for an error code
pub fn description_for(code: &str) -> Option<&'static str> {
    lookup(code).map(|e| e.description)
}

/// All known error codes
pub static ERROR_CODES: &[ErrorCodeInfo] = &[
    ErrorCodeInfo {
        code: UNEXPECTED_CHARACTER,
        description: "Unexpected character",
        help: Some(
            "Statements use digits, letters and + - * / = only, written without spaces or parentheses.",
        ),
    },
    ErrorCodeInfo {
        code: UNEXPECTED_END,
        description: "Unexpected end of input",
        help: Some("Expected a number or a variable here."),
    },
    ErrorCodeInfo {
        code: NUMBER_TOO_LARGE,
        description: "Integer literal too large",
        help: Some("Integers must lie between -9223372036854775808 and 9223372036854775807."),
    },
    ErrorCodeInfo {
        code: INVALID_ASSIGNMENT_TARGET,
        description: "Invalid assignment target",
        help: Some("Only a single variable name may appear on the left of `=`, e.g. `x=1+2`."),
    },
    ErrorCodeInfo {
        code: UNBOUND_VARIABLE,
        description: "Unbound variable",
        help: Some("Assign the variable first, e.g. `x=0`. Use :vars to list defined variables."),
    },
    ErrorCodeInfo {
        code: DIVISION_BY_ZERO,
        description: "Division by zero",
        help: None,
    },
    ErrorCodeInfo {
        code: ARITHMETIC_OVERFLOW,
        description: "Arithmetic overflow",
        help: Some("Results must fit in a 64-bit signed integer."),
    },
];
