//! seedsnap
//!
//! Snapshot a relational database into a replayable ActiveRecord seed
//! file.
//!
//! This is the command-line entry point; the actual pipeline lives in
//! `seedsnap_cli`.

use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", seedsnap_cli::USAGE);
        return;
    }
    if args.iter().any(|a| a == "-V" || a == "--version") {
        println!("seedsnap {}", seedsnap_cli::VERSION);
        return;
    }

    let options = match seedsnap_cli::CliOptions::from_args(args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            eprintln!("{}", seedsnap_cli::USAGE);
            std::process::exit(2);
        }
    };

    if let Err(e) = seedsnap_cli::run(&options) {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
}
