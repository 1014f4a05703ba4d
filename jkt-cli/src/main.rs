//! JKT CLI - Command line tool for the Jakarta air quality dataset.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "jkt-cli",
    version,
    about = "Jakarta air quality (AQI) toolkit"
)]
struct Cli {
    /// Read records from this CSV instead of the built-in 2024 dataset
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    #[command(subcommand)]
    command: jkt_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("running {:?}", cli.command);
    jkt_cmd::run(cli.command, cli.csv.as_deref())
}
