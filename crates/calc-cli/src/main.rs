use anyhow::Result;
use clap::builder::FalseyValueParser;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

mod commands;
mod config;

/// Integer calculator with variables.
///
/// Statements are written without spaces: numbers, variable names and the
/// operators + - * / with the usual precedence, optionally assigned with `=`.
///
/// EXAMPLES:
///     calc                         Start the interactive REPL
///     calc eval "x=6" "x*7"        Evaluate statements in one session
///     calc ast "a+b*2"             Print the parsed statement as JSON
///
/// ENVIRONMENT VARIABLES:
///     CALC_CONFIG        Configuration file (default: ~/.calc/config.toml)
///     CALC_DIAGNOSTICS   Set to 'json' for JSON error output
///     CALC_HISTORY_FILE  REPL history location
///     CALC_NO_HISTORY    Set to disable REPL history
///     CALC_SHOW_ENV      Set to '1' to print all variables after each statement
///     CALC_LOG           Log filter, e.g. 'calc_runtime=trace'
///     NO_COLOR           Set to disable colored output
#[derive(Parser)]
#[command(name = "calc")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file to load instead of ~/.calc/config.toml
    #[arg(long, global = true, env = "CALC_CONFIG")]
    config: Option<PathBuf>,

    /// Log parser and evaluator activity to stderr (-vv for more)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive REPL (the default)
    ///
    /// REPL COMMANDS:
    ///     :help, :h      Show help
    ///     :help <code>   Explain an error code
    ///     :quit, :q      Exit REPL
    ///     :reset         Clear all variables
    ///     :vars, :v      List defined variables
    ///
    /// EXAMPLES:
    ///     calc repl                     Start the REPL
    ///     calc repl --no-history        Disable history persistence
    ///     calc repl --show-env          Print variables after each line
    #[command(visible_alias = "r")]
    Repl {
        /// Disable history persistence (for privacy)
        #[arg(long, env = "CALC_NO_HISTORY", value_parser = FalseyValueParser::new())]
        no_history: bool,
        /// Print every variable after each statement
        #[arg(long)]
        show_env: bool,
    },

    /// Evaluate statements in order, sharing one set of variables
    ///
    /// Prints the value of each statement. Stops at the first error and
    /// exits with a non-zero status.
    ///
    /// EXAMPLES:
    ///     calc eval "2+3*4"
    ///     calc eval "r=7" "area=3*r*r" --show-env
    ///     calc eval "1/0" --json
    #[command(visible_alias = "e")]
    Eval {
        /// Statements to evaluate
        #[arg(required = true)]
        statements: Vec<String>,
        /// Output diagnostics in JSON format
        #[arg(long)]
        json: bool,
        /// Print every variable after the last statement
        #[arg(long)]
        show_env: bool,
    },

    /// Parse a statement and print its AST as JSON
    Ast {
        /// Statement to parse
        statement: String,
    },

    /// Generate shell completion scripts
    ///
    /// EXAMPLES:
    ///     calc completions bash > /etc/bash_completion.d/calc
    ///     calc completions zsh > ~/.zfunc/_calc
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::new().filter_or("CALC_LOG", "warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.format_timestamp(None).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Repl {
        no_history: false,
        show_env: false,
    });

    match command {
        Commands::Repl {
            no_history,
            show_env,
        } => {
            let mut config = config::Config::load(cli.config.as_deref())?;
            // Command-line flags override config file and environment
            config.no_history |= no_history;
            config.show_env |= show_env;
            log::debug!("effective configuration: {:?}", config);
            commands::repl::run(&config)?;
        }
        Commands::Eval {
            statements,
            json,
            show_env,
        } => {
            let mut config = config::Config::load(cli.config.as_deref())?;
            config.json |= json;
            config.show_env |= show_env;
            log::debug!("effective configuration: {:?}", config);
            commands::eval::run(&statements, &config)?;
        }
        Commands::Ast { statement } => commands::ast::run(&statement)?,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "calc", &mut io::stdout());
        }
    }

    Ok(())
}
