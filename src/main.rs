mod cli;
mod commands;
mod config;
mod env;
mod error;
mod extension;
mod fs;
mod importer;
mod output;
mod registry;
mod request;

use clap::Parser;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
