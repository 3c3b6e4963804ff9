use std::{
    fs,
    io::{self, Read},
    process::ExitCode,
    time::Instant,
};

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tree_parsers::{
    errors::errors::Error, json, markup, parse_expression, parse_json, parse_markup, render_error,
};

#[derive(Parser, Debug)]
#[command(name = "tree-parsers", version, about = "Parse JSON, markup or arithmetic text")]
struct Args {
    /// Which parser to run.
    #[arg(value_enum)]
    dialect: Dialect,

    /// Input file path. Omit or use '-' to read from stdin.
    #[arg(conflicts_with = "eval")]
    input: Option<String>,

    /// Parse this text instead of reading a file.
    #[arg(short, long, value_name = "text")]
    eval: Option<String>,

    /// Pretty-print the parsed value.
    #[arg(long)]
    pretty: bool,

    /// Log parser progress to stderr (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Dialect {
    Json,
    Markup,
    Expr,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let (source, source_name) = match read_input(&args) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(2);
        }
    };

    let start = Instant::now();
    let result = run(args.dialect, &source, args.pretty);
    debug!("Parsed in {:?}", start.elapsed());

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", render_error(&error, &source, &source_name));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(dialect: Dialect, source: &str, pretty: bool) -> Result<String, Error> {
    match dialect {
        Dialect::Json => {
            let value = parse_json(source)?;
            Ok(if pretty {
                json::writer::to_string_pretty(&value)
            } else {
                json::writer::to_string(&value)
            })
        }
        Dialect::Markup => {
            let value = parse_markup(source)?;
            Ok(if pretty {
                markup::writer::to_string_pretty(&value)
            } else {
                markup::writer::to_string(&value)
            })
        }
        Dialect::Expr => parse_expression(source).map(|value| value.to_string()),
    }
}

/// Returns the input text and the name to show in diagnostics.
fn read_input(args: &Args) -> io::Result<(String, String)> {
    if let Some(text) = &args.eval {
        return Ok((text.clone(), String::from("<eval>")));
    }

    match args.input.as_deref() {
        None | Some("-") => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok((buffer, String::from("<stdin>")))
        }
        Some(path) => {
            let contents = fs::read_to_string(path)
                .map_err(|err| io::Error::new(err.kind(), format!("{path}: {err}")))?;
            Ok((contents, path.to_string()))
        }
    }
}
