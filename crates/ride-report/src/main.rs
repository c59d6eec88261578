//! EV Ride Report - Main Entry Point

use clap::Parser;
use ride_report::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(&cli)
}
