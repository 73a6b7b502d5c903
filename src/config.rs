use std::env;
use std::path::PathBuf;

use crate::error::{GardenError, Result};

pub const DEFAULT_STORAGE_KEY: &str = "garden-planner-storage";

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory holding the persisted store snapshot.
    pub data_dir: PathBuf,
    /// Namespaced key the whole store is persisted under.
    pub storage_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let port = env::var("GARDEN_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|e| GardenError::Config(format!("GARDEN_PORT must be a number: {e}")))?;

        Ok(Config {
            host: env::var("GARDEN_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            data_dir: env::var("GARDEN_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            storage_key: env::var("GARDEN_STORAGE_KEY")
                .unwrap_or_else(|_| DEFAULT_STORAGE_KEY.to_string()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
