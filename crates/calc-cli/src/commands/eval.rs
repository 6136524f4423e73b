//! Eval command - evaluate statements given on the command line

use super::{format_diagnostic, format_result, print_vars};
use crate::config::Config;
use anyhow::{bail, Result};
use calc_runtime::ReplCore;

/// Evaluate `statements` in order against one environment
///
/// Each value is printed on its own line. The first failing statement stops
/// evaluation; its diagnostics go to stdout in JSON mode and to stderr
/// otherwise.
pub fn run(statements: &[String], config: &Config) -> Result<()> {
    let mut repl = ReplCore::new();

    for (index, statement) in statements.iter().enumerate() {
        let output = eval_statement(&mut repl, statement, config);
        match output {
            Ok(text) => {
                if let Some(text) = text {
                    println!("{}", text);
                }
            }
            Err(diagnostics) => {
                for diag in diagnostics {
                    if config.json {
                        println!("{}", diag);
                    } else {
                        eprintln!("{}", diag);
                    }
                }
                bail!("statement {} failed: {}", index + 1, statement.trim());
            }
        }
    }

    if config.show_env {
        print_vars(&repl.variables(), config.no_color);
    }

    Ok(())
}

/// Evaluate one statement, returning the text to print or the formatted
/// diagnostics
fn eval_statement(
    repl: &mut ReplCore,
    statement: &str,
    config: &Config,
) -> Result<Option<String>, Vec<String>> {
    let result = repl.eval_line(statement.trim());
    if result.is_ok() {
        Ok(format_result(&result))
    } else {
        Err(result
            .diagnostics
            .iter()
            .map(|diag| format_diagnostic(diag, config.json, config.no_color))
            .collect())
    }
}
