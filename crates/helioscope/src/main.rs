//! Helioscope binary entry point

use clap::Command;
use helioscope::{Telescope, TelescopeConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr so they never scribble over the frame
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Command::new("helioscope")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Live solar observations as ASCII art in the terminal")
        .arg_required_else_help(false)
        .subcommand(
            Command::new("once").about("Fetch and render a single frame, then exit"),
        );

    let matches = cli.get_matches();

    let mut telescope = match Telescope::new(TelescopeConfig::default()) {
        Ok(telescope) => telescope,
        Err(error) => {
            eprintln!("Failed to start telescope: {error}");
            std::process::exit(1);
        }
    };

    match matches.subcommand() {
        Some(("once", _)) => {
            if let Err(error) = telescope.run_once().await {
                eprintln!("{error}");
                std::process::exit(1);
            }
        }
        _ => telescope.run().await,
    }

    std::process::exit(0);
}
