use anyhow::{Context, Result};
use wall_sizing::{cabinet, SearchConfig, DEFAULT_CABINET_ID};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub search: SearchConfig,
    /// Cabinet used when a search request does not name one.
    pub default_cabinet: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let max_dimension = env_or("WALL_MAX_DIMENSION", "50")
            .parse::<u32>()
            .context("WALL_MAX_DIMENSION must be a positive integer")?;
        let search = SearchConfig::new(max_dimension).context("WALL_MAX_DIMENSION out of range")?;

        let default_cabinet = env_or("WALL_DEFAULT_CABINET", DEFAULT_CABINET_ID);
        cabinet::lookup(&default_cabinet)
            .with_context(|| format!("WALL_DEFAULT_CABINET '{default_cabinet}' is not in the catalog"))?;

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            search,
            default_cabinet,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            search: SearchConfig::default(),
            default_cabinet: DEFAULT_CABINET_ID.to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
