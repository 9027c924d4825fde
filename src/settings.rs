use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub path: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Frontend origin allowed to make credentialed requests.
    pub allowed_origin: String,
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Settings {
    /// Defaults, then `trivia.toml` (or `TRIVIA_CONFIG`), then `TRIVIA__*` env vars.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let file = dotenv::var("TRIVIA_CONFIG").unwrap_or_else(|_| "trivia".to_owned());
        Self::builder()?
            .add_source(File::with_name(&file).required(false))
            .add_source(Environment::with_prefix("TRIVIA").separator("__"))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("database.path", "trivia.db")?
            .set_default("database.max_connections", 5_i64)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080_i64)?
            .set_default("server.allowed_origin", "http://localhost:3000")
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database: DatabaseSettings {
                path: "trivia.db".to_owned(),
                max_connections: 5,
            },
            server: ServerSettings {
                host: "0.0.0.0".to_owned(),
                port: 8080,
                allowed_origin: "http://localhost:3000".to_owned(),
            },
        }
    }
}
