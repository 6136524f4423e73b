//! REPL command implementation

use super::{format_diagnostic, format_result, print_vars};
use crate::config::Config;
use anyhow::Result;
use calc_runtime::{error_codes, ReplCore};
use log::{debug, warn};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// What the loop should do after a `:` command
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Continue,
    Quit,
}

/// Run the interactive REPL
///
/// Uses the rustyline line editor. History is loaded and saved unless
/// `config.no_history` is set.
pub fn run(config: &Config) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut repl = ReplCore::new();

    let history_path = if config.no_history {
        None
    } else {
        config.history_path()
    };
    if let Some(ref path) = history_path {
        // Missing on first run
        if let Err(err) = rl.load_history(path) {
            debug!("no history loaded from {}: {}", path.display(), err);
        }
    }

    println!("Calc v{} REPL", calc_runtime::VERSION);
    println!("Type statements like x=6 or x*7, or :quit to exit");
    println!("Commands: :quit (or :q), :reset, :help, :vars");
    println!();

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }

                if trimmed.starts_with(':') {
                    if run_command(trimmed, &mut repl, config) == Action::Quit {
                        println!("Goodbye!");
                        break;
                    }
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);

                let result = repl.eval_line(trimmed);
                for diag in &result.diagnostics {
                    println!("{}", format_diagnostic(diag, config.json, config.no_color));
                }
                if let Some(text) = format_result(&result) {
                    println!("{}", text);
                }

                if config.show_env && result.is_ok() {
                    print_vars(&repl.variables(), config.no_color);
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                println!("^C");
                println!("Use :quit or :q to exit");
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    if let Some(path) = history_path {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(err) = rl.save_history(&path) {
            warn!("could not save history to {}: {}", path.display(), err);
        }
    }

    Ok(())
}

fn run_command(command: &str, repl: &mut ReplCore, config: &Config) -> Action {
    if let Some((name, code)) = command.split_once(char::is_whitespace) {
        if name == ":help" || name == ":h" {
            match explain_code(code.trim()) {
                Some(text) => println!("{}", text),
                None => println!("Unknown error code: {}", code.trim()),
            }
            return Action::Continue;
        }
    }

    match command {
        ":quit" | ":q" => return Action::Quit,
        ":reset" => {
            repl.reset();
            println!("REPL state reset");
        }
        ":help" | ":h" => print_help(),
        ":vars" | ":v" => print_vars(&repl.variables(), config.no_color),
        other => {
            println!("Unknown command: {}", other);
            println!("Type :help for a list of commands");
        }
    }
    Action::Continue
}

/// Description and help for an error code such as `CALC2002`
fn explain_code(code: &str) -> Option<String> {
    let code = code.to_ascii_uppercase();
    let description = error_codes::description_for(&code)?;
    let mut text = format!("{}: {}", code, description);
    if let Some(help) = error_codes::help_for(&code) {
        text.push('\n');
        text.push_str(help);
    }
    Some(text)
}

/// Print help information
fn print_help() {
    println!("Calc REPL Commands:");
    println!("  :quit, :q         Exit the REPL");
    println!("  :reset            Clear all variables");
    println!("  :help, :h         Show this help message");
    println!("  :help <code>      Explain an error code, e.g. :help CALC2001");
    println!("  :vars, :v         List variables and their values");
    println!();
    println!("Statements use integers, variable names and + - * / without spaces.");
    println!("Examples:");
    println!("  > 2+3*4");
    println!("  > width=12");
    println!("  > area=width*width");
    println!("  > area/5");
}
