use config::{Config, ConfigError, File};
use serde::Deserialize;

// Environment variable that replaces `database.url` when set
pub const DATABASE_URL_ENV: &str = "DB_URI";

#[derive(Deserialize, Debug, Clone)]
pub struct Settings{
    pub application: ApplicationSettings,
    pub database: DatabaseSettings
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApplicationSettings{
    pub host: String,
    pub port: u16
}

#[derive(Deserialize, Debug, Clone)]
pub struct DatabaseSettings{
    pub url: String,
    pub max_connections: u32,
    pub busy_timeout_ms: u64
}

impl Settings{
    pub fn get() -> Result<Self, ConfigError>{
        Config::builder()
            .add_source(File::with_name("configuration/base.yaml"))
            .set_override_option("database.url", std::env::var(DATABASE_URL_ENV).ok())?
            .build()?
            .try_deserialize::<Settings>()
    }
}

impl DatabaseSettings {
    /// Path handed to SQLite. Accepts plain paths as well as `sqlite:///path` urls.
    pub fn get_database_url(&self) -> String{
        match self.url.strip_prefix("sqlite:///") {
            Some(path) => path.to_string(),
            None => self.url.clone()
        }
    }
}
