use std::io::{self, IsTerminal};

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Reads `scutil` output on stdin and writes the equivalent JSON to stdout.
#[derive(Parser, Debug)]
#[command(name = "scutil-to-json", version, about)]
struct Args {}

fn main() {
    let _args = Args::parse();
    init_tracing();

    if let Err(err) = run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> scutil_json::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    scutil_json::convert_to_writer(stdin.lock(), stdout.lock())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .try_init();
}
