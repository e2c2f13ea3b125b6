// tinyc-check: syntax checker for a small C-like language

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{error::ErrorKind, Parser};
use crossterm::style::{style, Color, Stylize};
use tracing_subscriber::EnvFilter;

use tinyc_check::parser::parse::DEFAULT_MAX_DEPTH;
use tinyc_check::{
    check_tokens, read_source, tokenize, CheckError, CheckOptions, ColorChoice, ParseSummary,
    SUCCESS_MESSAGE,
};

/// Check a source file against the language grammar
#[derive(Debug, Parser)]
#[command(name = "tinyc-check", version)]
struct Args {
    /// Source file to check
    source_file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print every token to stderr before parsing
    #[arg(long)]
    dump_tokens: bool,

    /// When to color the result line
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Report string literals on the line they start on
    #[arg(long)]
    attribute_string_lines: bool,

    /// Deepest allowed nesting of statements and expressions
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl Args {
    fn options(&self) -> CheckOptions {
        CheckOptions {
            attribute_string_lines: self.attribute_string_lines,
            max_depth: self.max_depth,
        }
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            let program = std::env::args()
                .next()
                .unwrap_or_else(|| "tinyc-check".to_string());
            println!("Usage: {} <source_file>", program);
            return ExitCode::FAILURE;
        }
        Err(err) => err.exit(),
    };

    init_logging(args.verbose);

    let styled = args.color.enabled(io::stdout().is_terminal());
    match run(&args) {
        Ok(summary) => {
            tracing::info!(statements = summary.statements, "source accepted");
            report(SUCCESS_MESSAGE, Color::Green, styled);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::info!(line = ?err.line(), "source rejected");
            report(&err.to_string(), Color::Red, styled);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ParseSummary, CheckError> {
    tracing::info!(path = %args.source_file.display(), "checking");

    let options = args.options();
    let source = read_source(&args.source_file)?;
    let tokens = tokenize(&source, &options)?;

    if args.dump_tokens {
        for token in &tokens {
            eprintln!(
                "{:>4}:{:<4} {:<14} {}",
                token.location.line,
                token.location.column,
                format!("{:?}", token.kind),
                token
            );
        }
    }

    Ok(check_tokens(&tokens, &options)?)
}

fn report(message: &str, color: Color, styled: bool) {
    if styled {
        println!("{}", style(message).with(color));
    } else {
        println!("{}", message);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
