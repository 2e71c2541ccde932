mod args;
mod run;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::args::{Args, Command};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.common.log_level);
    debug!("{args:?}");

    let lang = args.common.lang;
    match args.command {
        Command::Tui(tui_args) => run::as_tui(&tui_args, lang),
        command => run::as_cli(&command, lang),
    }
}

fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
