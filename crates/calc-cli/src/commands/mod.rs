pub mod ast;
pub mod eval;
pub mod repl;

use calc_runtime::{Diagnostic, Number, ReplBinding, ReplResult};
use colored::*;

/// Format a diagnostic for the terminal
///
/// JSON output is compact, one diagnostic per line. Human output keeps the
/// caret snippet and colors the header unless `no_color` is set.
pub fn format_diagnostic(diag: &Diagnostic, json: bool, no_color: bool) -> String {
    if json {
        return diag
            .to_json_compact()
            .unwrap_or_else(|err| format!("{{\"error\":\"{}\"}}", err));
    }

    let human = diag.to_human_string();
    if no_color {
        return human.trim_end().to_string();
    }

    let mut lines = human.trim_end().lines();
    let mut output = String::new();
    if let Some(header) = lines.next() {
        output.push_str(&header.red().bold().to_string());
    }
    for line in lines {
        output.push('\n');
        if line.trim_start().starts_with("= help:") {
            output.push_str(&line.cyan().to_string());
        } else {
            output.push_str(&line.blue().to_string());
        }
    }
    output
}

/// Text printed for a successful statement: `name = value` for assignments,
/// the bare value otherwise
pub fn format_result(result: &ReplResult) -> Option<String> {
    let value = result.value?;
    Some(match &result.assigned {
        Some(name) => format!("{} = {}", name, value),
        None => value.to_string(),
    })
}

fn format_binding(name: &str, value: Number, no_color: bool) -> String {
    if no_color {
        format!("{:<16} {}", name, value)
    } else {
        format!("{:<16} {}", name.green(), value)
    }
}

/// Print all bindings in name order
pub fn print_vars(bindings: &[ReplBinding], no_color: bool) {
    if bindings.is_empty() {
        println!("No variables defined.");
        return;
    }

    println!("Variables ({}):", bindings.len());
    for binding in bindings {
        println!("  {}", format_binding(&binding.name, binding.value, no_color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_runtime::ReplCore;

    #[test]
    fn test_format_diagnostic_plain() {
        let mut repl = ReplCore::new();
        let result = repl.eval_line("1+y");
        let formatted = format_diagnostic(&result.diagnostics[0], false, true);
        assert!(formatted.starts_with("error[CALC2001]"), "{}", formatted);
        assert!(formatted.contains("   | 1+y"));
        assert!(!formatted.ends_with('\n'));
    }

    #[test]
    fn test_format_diagnostic_json() {
        let mut repl = ReplCore::new();
        let result = repl.eval_line("8/0");
        let formatted = format_diagnostic(&result.diagnostics[0], true, true);
        let parsed: serde_json::Value = serde_json::from_str(&formatted).unwrap();
        assert_eq!(parsed["code"], "CALC2002");
        assert_eq!(parsed["column"], 1);
        assert_eq!(parsed["length"], 3);
    }

    #[test]
    fn test_format_result() {
        let mut repl = ReplCore::new();
        assert_eq!(format_result(&repl.eval_line("x=2*3")).as_deref(), Some("x = 6"));
        assert_eq!(format_result(&repl.eval_line("x+1")).as_deref(), Some("7"));
        assert_eq!(format_result(&repl.eval_line("q")), None);
    }

    #[test]
    fn test_format_binding_plain() {
        assert_eq!(format_binding("x", -4, true), format!("{:<16} -4", "x"));
    }
}
