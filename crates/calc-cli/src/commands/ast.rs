//! AST dump command - output AST as JSON

use anyhow::{anyhow, Result};
use calc_runtime::ast::VersionedAst;
use calc_runtime::{parse, Diagnostic};

/// Dump the AST of one statement as JSON
///
/// On a syntax error the diagnostic is printed to stderr as JSON.
pub fn run(statement: &str) -> Result<()> {
    println!("{}", dump(statement)?);
    Ok(())
}

fn dump(statement: &str) -> Result<String> {
    let source = statement.trim();
    match parse(source) {
        Ok(ast) => Ok(VersionedAst::new(ast).to_json()?),
        Err(err) => {
            let diag = Diagnostic::from_syntax_error(&err, source);
            eprintln!("{}", diag.to_json_string()?);
            Err(anyhow!("Parse error: {}", err))
        }
    }
}
