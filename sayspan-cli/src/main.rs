// sayspan-cli/src/main.rs
//
// This file defines the command-line interface (CLI) for the Sayspan
// duration formatter. It uses the `clap` crate to parse a single second
// count, invokes the core formatting logic (`sayspan_core`), and prints
// the resulting phrase.
//
// The application uses env_logger with the RUST_LOG environment variable:
// - RUST_LOG=info (default): Normal operation logs
// - RUST_LOG=debug: Detailed debugging information

use clap::Parser;
use log::{debug, error};
use std::process;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Sayspan: phrases second counts in plain English",
    long_about = "Converts a number of seconds into a natural-language duration \
                  via the sayspan-core library, e.g. 3662 becomes \
                  \"1 hour, 1 minute and 2 seconds\"."
)]
struct Cli {
    /// Number of seconds to phrase (must be non-negative)
    #[arg(required = true, value_name = "SECONDS", allow_negative_numbers = true)]
    seconds: i64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    debug!("phrasing a duration of {} seconds", cli.seconds);

    match sayspan_core::try_format_duration(cli.seconds) {
        Ok(phrase) => println!("{phrase}"),
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
