//! Interactive console for the Cyrillic shift and table ciphers.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cyrcipher::console::{CipherSetup, Console};
use cyrcipher::{Cipher, DegeneracyPolicy};

#[derive(Parser)]
#[command(
    name = "cyrcipher",
    about = "Encrypt and decrypt Cyrillic text with a shift or table cipher",
    version
)]
struct Cli {
    /// Cipher to use
    #[arg(short, long, value_enum, default_value_t = CipherKind::Shift)]
    cipher: CipherKind,

    /// Key for the shift cipher (prompted if omitted)
    #[arg(short, long)]
    key: Option<String>,

    /// Column count for the table cipher (prompted if omitted)
    #[arg(long, allow_negative_numbers = true)]
    columns: Option<i64>,

    /// Rule for rejecting weak shift keys
    #[arg(long, value_enum, default_value_t = Degeneracy::AllSame)]
    degeneracy: Degeneracy,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum CipherKind {
    /// Gronsfeld shift cipher keyed by letters
    Shift,
    /// Route transposition keyed by a column count
    Table,
}

#[derive(Clone, Copy, ValueEnum)]
enum Degeneracy {
    /// Reject keys made of one repeated letter
    AllSame,
    /// Also reject keys that are at least half "А"
    ZeroMajority,
}

impl From<Degeneracy> for DegeneracyPolicy {
    fn from(d: Degeneracy) -> Self {
        match d {
            Degeneracy::AllSame => DegeneracyPolicy::AllSame,
            Degeneracy::ZeroMajority => DegeneracyPolicy::ZeroShiftMajority,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut console = Console::new(stdin.lock(), stdout.lock(), stderr.lock());

    let setup = match cli.cipher {
        CipherKind::Shift => CipherSetup::Shift {
            key: cli.key.clone(),
            policy: cli.degeneracy.into(),
        },
        CipherKind::Table => CipherSetup::Table {
            columns: cli.columns,
        },
    };
    let Some(cipher) = console.open_cipher(&setup)? else {
        return Ok(ExitCode::FAILURE);
    };
    info!(cipher = cipher.name(), "cipher loaded");
    console.run(cipher.as_ref()).context("console I/O failed")?;
    Ok(ExitCode::SUCCESS)
}
