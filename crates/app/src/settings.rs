//! Handles settings for the application. Configuration is written in
//! `settings.toml`; every key has a default suitable for local development,
//! and `SCHOLARQUEST__`-prefixed environment variables override the file.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    pub static_dir: String,
}

#[derive(Debug, Deserialize)]
pub struct Sqlite {
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub sqlite: Sqlite,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.port", 3001)?
            .set_default("server.static_dir", "public")?
            .set_default("sqlite.path", "scholarquest.db")?
            .add_source(File::with_name("settings").required(false))
            .add_source(Environment::with_prefix("SCHOLARQUEST").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}
