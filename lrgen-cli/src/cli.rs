use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use lrgen_symbol::TerminalId;

use crate::error::CliError;
use crate::meta;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmitFormat {
    Json,
    Text,
}

/// Build canonical LR(1) tables from a grammar file, optionally drive a
/// sample parse, and emit the result.
#[derive(Debug, Parser)]
#[command(name = "lrgen", version, about)]
pub struct Args {
    /// Path to the grammar file, written in the `LHS : OPT | OPT ;` meta-syntax.
    #[arg(long)]
    pub grammar: PathBuf,

    /// Path to a whitespace-separated token stream to parse after construction.
    /// Each token is a terminal name, optionally followed by `=lexeme`.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Where to write the emitted artifact. Defaults to stdout.
    #[arg(long)]
    pub emit: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = EmitFormat::Json)]
    pub emit_format: EmitFormat,

    /// Resolve conflicts (shift over reduce, earlier rule wins) instead of
    /// failing on the first one found.
    #[arg(long)]
    pub fallback_on_conflict: bool,

    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[arg(short = 'q', long)]
    pub quiet: bool,
}

pub fn init_logging(args: &Args) {
    let level = if args.quiet {
        log::LevelFilter::Error
    } else {
        match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    env_logger::Builder::new().filter_level(level).init();
}

pub fn run(args: &Args) -> Result<(), CliError> {
    let source = fs::read_to_string(&args.grammar)?;
    let raw_rules = meta::read_grammar(&source)?;

    let (parser, conflicts) = if args.fallback_on_conflict {
        lrgen::generate_with_fallback(raw_rules)?
    } else {
        (lrgen::generate(raw_rules)?, Vec::new())
    };
    for conflict in &conflicts {
        log::warn!(
            "resolved conflict in state {} on terminal {}: {:?} vs {:?}",
            conflict.state,
            conflict.terminal.0,
            conflict.first,
            conflict.second
        );
    }

    if let Some(input_path) = &args.input {
        let input_source = fs::read_to_string(input_path)?;
        let tokens = parse_token_stream(&parser.grammar, &input_source)?;
        let cst = parser.parse(tokens)?;
        log::info!("accepted; CST has {} leaves", cst.leaves().len());
    }

    let artifact = parser.emit();
    let rendered = match args.emit_format {
        EmitFormat::Json => artifact.to_json_pretty()?,
        EmitFormat::Text => artifact.to_text(),
    };
    match &args.emit {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }

    Ok(())
}

fn parse_token_stream(
    grammar: &lrgen::Grammar,
    source: &str,
) -> Result<Vec<lrgen::Token>, CliError> {
    source
        .split_whitespace()
        .map(|word| {
            let (name, lexeme) = match word.split_once('=') {
                Some((name, lexeme)) => (name, Some(lexeme.to_string())),
                None => (word, None),
            };
            let terminal: TerminalId = grammar
                .symbols()
                .terminal_id(name)
                .ok_or_else(|| CliError::UnknownTerminal(name.to_string()))?;
            Ok(match lexeme {
                Some(lexeme) => lrgen::Token::with_lexeme(terminal, lexeme),
                None => lrgen::Token::new(terminal),
            })
        })
        .collect()
}
