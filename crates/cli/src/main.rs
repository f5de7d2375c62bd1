//! ShopLite Client CLI

use std::process;

use crate::cli::Cli;

mod cli;
mod config;
mod logging;
mod navigator;
mod output;

#[tokio::main]
pub async fn main() {
    let cli = match Cli::load() {
        Ok(cli) => cli,
        Err(error) => error.exit(),
    };

    if let Err(error) = logging::init_subscriber(&cli.logging) {
        eprintln!("failed to initialise logging: {error}");
        process::exit(1);
    }

    if let Err(error) = cli.run().await {
        eprintln!("{error}");
        process::exit(1);
    }
}
