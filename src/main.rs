//! CLI tool to validate and pretty-print GCL files.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

const RULER: &str = "----------------------------------------------------------------";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check that GCL file(s) parse.
    Validate {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Parse GCL file(s) and print the resulting values.
    Print {
        /// Spaces per nesting level.
        #[arg(long, default_value_t = gcl::Printer::DEFAULT_INDENT)]
        indent: usize,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    setup_logging();

    let cli = Cli::parse();
    tracing::debug!(?cli);

    let (files, indent) = match &cli.command {
        Command::Validate { files } => (files, None),
        Command::Print { indent, files } => (files, Some(*indent)),
    };

    let mut had_error = false;

    for path in files {
        let name = path.display();
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(path = %path.display(), "failed to read input");
                eprintln!("{name}: {e}");
                had_error = true;
                continue;
            }
        };

        match gcl::parse(&content) {
            Ok(value) => match indent {
                None => eprintln!("{name}: valid ({})", value.kind()),
                Some(indent) => {
                    println!("{RULER}");
                    println!("{}", gcl::pretty_with_indent(&value, indent));
                    println!("{RULER}");
                }
            },
            Err(e) => {
                eprintln!("{name}: {e}");
                had_error = true;
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
