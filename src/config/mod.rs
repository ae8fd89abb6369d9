use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    net::{IpAddr, Ipv4Addr},
    path::Path,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "depois.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_PORT: &str = "APP_PORT";

const DEFAULT_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        if let Ok(port) = env::var(ENV_NAME_PORT) {
            cfg.webserver.port = port
                .parse()
                .map_err(|err| anyhow!("Invalid {ENV_NAME_PORT} '{port}': {err}"))?;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { db, webserver } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("Invalid connection pool size: 0"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer {
            address,
            port,
            cors,
        } = webserver.unwrap_or_default();

        let webserver = WebServer {
            address: address.unwrap_or(DEFAULT_ADDRESS),
            port: port.unwrap_or(DEFAULT_PORT),
            enable_cors: cors,
        };

        Ok(Self { db, webserver })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let cfg = Config::try_load_from_file_or_default(file).unwrap();
        assert!(!cfg.db.conn_sqlite.is_empty());
        assert!(cfg.db.conn_pool_size > 0);
    }

    #[test]
    fn apply_defaults_for_missing_webserver_values() {
        let raw: raw::Config = toml::from_str(
            r#"
[db]
connection-sqlite = ":memory:"
connection-pool-size = 1

[webserver]
cors = true
"#,
        )
        .unwrap();
        let cfg = Config::try_from(raw).unwrap();
        assert_eq!(":memory:", cfg.db.conn_sqlite);
        assert_eq!(DEFAULT_ADDRESS, cfg.webserver.address);
        assert_eq!(DEFAULT_PORT, cfg.webserver.port);
        assert!(cfg.webserver.enable_cors);
    }

    #[test]
    fn reject_empty_connection_pool() {
        let raw: raw::Config = toml::from_str(
            r#"
[db]
connection-sqlite = ":memory:"
connection-pool-size = 0
"#,
        )
        .unwrap();
        assert!(Config::try_from(raw).is_err());
    }
}
