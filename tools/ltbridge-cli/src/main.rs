use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::Level;

mod commands;

#[derive(Parser)]
#[command(author, version, about = "Reads lt-proc streams and converts tagger output to Apertium format")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode an lt-proc stream into JSON entries
    Parse {
        /// Defaults to stdin.
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        #[arg(long)]
        pretty: bool,
    },
    /// Compile a text tag lexicon to an rkyv binary
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Map tagged tokens (`lexeme tag [lemma]` per line) to an Apertium stream
    Map {
        /// Text lexicon, or a compiled one with the `.rkyv` extension.
        #[arg(short, long, value_name = "FILE")]
        lexicon: PathBuf,

        /// Defaults to stdin.
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Fail when any tag has no mapping.
        #[arg(long)]
        strict: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = match cli.command {
        Command::Parse { input, pretty } => {
            let text = read_input(input.as_deref())?;
            let mut json = commands::parse_report(&text, pretty)?;
            json.push('\n');
            json
        }
        Command::Compile { input, output } => {
            let text = fs::read_to_string(&input).with_context(|| format!("reading {}", input.display()))?;
            let bytes = commands::compile_lexicon(&text).with_context(|| format!("compiling {}", input.display()))?;
            fs::write(&output, bytes.as_slice()).with_context(|| format!("writing {}", output.display()))?;
            tracing::info!(bytes = bytes.len(), path = %output.display(), "wrote compiled lexicon");
            return Ok(());
        }
        Command::Map { lexicon, input, strict } => {
            let lexicon = commands::Lexicon::load(&lexicon)?;
            let text = read_input(input.as_deref())?;
            let tokens = ltbridge_parser::parse_tagged(&text)?;
            lexicon.map_tokens(&tokens, strict)?
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
