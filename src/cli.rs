use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::Config;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file
    #[arg(long = "config-file", value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// URL to the database
    #[arg(long = "db-url", value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Port of the web server
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,

    /// Allow requests from any origin
    #[arg(long = "enable-cors")]
    enable_cors: bool,
}

pub async fn run(args: Args) -> Result<()> {
    let Args {
        config_file,
        db_url,
        port,
        enable_cors,
    } = args;

    let mut cfg = Config::try_load_from_file_or_default(config_file)?;
    if let Some(db_url) = db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if let Some(port) = port {
        cfg.webserver.port = port;
    }
    if enable_cors {
        cfg.webserver.enable_cors = true;
    }

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = depois_db_sqlite::Connections::init(
        &cfg.db.conn_sqlite,
        u32::from(cfg.db.conn_pool_size),
    )?;
    depois_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let web_cfg = depois_webserver::Cfg {
        address: cfg.webserver.address,
        port: cfg.webserver.port,
    };
    depois_webserver::run(
        connections,
        cfg.webserver.enable_cors,
        web_cfg,
        env!("CARGO_PKG_VERSION"),
    )
    .await;
    Ok(())
}
