//! lexkit CLI
//!
//! Tokenizes source files and prints one token per line.

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;

use lexkit::{Config, LexAnalyzer};

/// A configurable lexical analyzer for small imperative languages
#[derive(Parser, Debug)]
#[command(name = "lexkit")]
#[command(version = "0.1.0")]
#[command(about = "Tokenize source files with a configurable lexer")]
struct Cli {
    /// Source files to tokenize
    #[arg(value_name = "FILE", required = true)]
    inputs: Vec<PathBuf>,

    /// Lexer configuration as JSON (defaults to the imperative preset)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Skip whitespace and comment tokens in the output
    #[arg(long)]
    significant_only: bool,

    /// Print the intern tables after each scan
    #[arg(long)]
    show_tables: bool,

    /// Exit nonzero if any diagnostic was reported
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let mut clean = true;
    for input in &cli.inputs {
        let source = fs::read_to_string(input)
            .with_context(|| format!("reading {}", input.display()))?;

        let mut analyzer = LexAnalyzer::new(config.clone());
        let result = analyzer.tokenize(&source);

        for diag in &result.diagnostics {
            log::warn!("{}: {}", input.display(), diag);
            clean = false;
        }

        for token in result.tokens.iter() {
            if cli.significant_only && token.kind.is_trivia() {
                continue;
            }
            println!("{}", token);
        }

        if cli.show_tables {
            println!("identifiers: {:?}", analyzer.identifiers());
            println!("numeric literals: {:?}", analyzer.numeric_literals());
        }
    }

    if cli.strict && !clean {
        process::exit(1);
    }
    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))
        }
        None => Ok(Config::imperative()),
    }
}
