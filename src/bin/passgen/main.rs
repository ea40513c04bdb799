use std::io::{self, Write};
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::Level;

use passgen::{CharacterClass, ClassSelection, GenerationError};

/// Generate a random password.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Length of the password.
    #[arg(short, long, default_value_t = 12, allow_negative_numbers = true)]
    length: i64,
    /// Exclude uppercase letters.
    #[arg(long)]
    no_upper: bool,
    /// Exclude lowercase letters.
    #[arg(long)]
    no_lower: bool,
    /// Exclude digits.
    #[arg(long)]
    no_digits: bool,
    /// Exclude special characters.
    #[arg(long)]
    no_special: bool,
    /// Log what's going on to stderr; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn selection(&self) -> ClassSelection {
        ClassSelection::all()
            .with(CharacterClass::Upper, !self.no_upper)
            .with(CharacterClass::Lower, !self.no_lower)
            .with(CharacterClass::Digit, !self.no_digits)
            .with(CharacterClass::Special, !self.no_special)
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();
    init_logging(args.log_level())?;

    let selection = args.selection();
    tracing::info!(length = args.length, classes = %selection, "parsed arguments");
    let password = passgen::generate(args.length, &selection)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Generated Password: {}", password.as_str())
        .and_then(|()| stdout.flush())
        .context("failed to write the password to stdout")?;
    Ok(())
}

fn init_logging(level: Level) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("failed to set up logging")
}

fn main() {
    match run() {
        Ok(()) => (),
        Err(ProgError::Other(err)) => {
            eprintln!("Error: {err:#}");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error(transparent)]
    Generation(GenerationError),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<GenerationError> for ProgError {
    fn from(err: GenerationError) -> ProgError {
        ProgError::Generation(err)
    }
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}
