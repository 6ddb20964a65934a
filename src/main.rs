mod cli;
mod config;
mod cue;
mod error;
mod hardware;
mod mission;
mod model;
mod path;
mod relay;
mod sim;
mod traverse;

use std::process;

use tracing_subscriber::EnvFilter;

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mazerun=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
