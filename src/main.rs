use anyhow::Result;
use clap::Parser;

mod cli;
mod config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before the logger reads RUST_LOG.
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = cli::Args::parse();
    cli::run(args).await
}
