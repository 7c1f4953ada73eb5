mod cli;
mod commands;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_forest::{util::LevelFilter, ForestLayer};
use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

use crate::cli::Cli;

fn setup_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let _ = Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .try_init();
}

fn main() -> Result<()> {
    if std::env::var_os("RUST_BACKTRACE").is_none() {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
    color_eyre::install()?;
    setup_tracing();
    Cli::parse().execute()
}
