mod cli;
mod commands;
mod config;
mod env;
mod error;
mod fs;
mod http;
mod importer;
mod logging;
mod notify;
mod resource;
mod store;
mod tracker;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
