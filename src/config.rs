use serde::{Deserialize, Serialize};

pub const DEFAULT_SECRET: &str = "change-me-secret";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,  // bytes
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Redis,
    Memory,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub backend: StoreBackend,
    pub url: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub allow_bootstrap: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_body_size: 1024 * 1024,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Redis,
            url: None,
            name: None,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            allow_bootstrap: true,
        }
    }
}

impl DatabaseConfig {
    pub fn namespace(&self) -> &str {
        self.name.as_deref().unwrap_or("company_ops")
    }

    pub fn redis_url(&self) -> &str {
        self.url.as_deref().unwrap_or("redis://127.0.0.1/")
    }
}

impl Config {
    /// Layers built-in defaults, `config/default.toml`, `APP_*` variables and
    /// the bare `DATABASE_URL` / `DATABASE_NAME` / `PORT` variables, in that order.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::Config::try_from(&Config::default())?)
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("auth.secret", std::env::var("APP_SECRET").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("database.name", std::env::var("DATABASE_NAME").ok())?
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?;

        config.try_deserialize()
    }

    pub fn uses_default_secret(&self) -> bool {
        self.auth.secret == DEFAULT_SECRET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_legacy_deployment() {
        let config = Config::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.database.backend, StoreBackend::Redis);
        assert_eq!(config.database.namespace(), "company_ops");
        assert!(config.auth.allow_bootstrap);
        assert!(config.uses_default_secret());
    }

    #[test]
    fn defaults_survive_a_config_round_trip() {
        let layered = config::Config::builder()
            .add_source(config::Config::try_from(&Config::default()).unwrap())
            .set_override("database.backend", "memory")
            .unwrap()
            .set_override("server.port", "9100")
            .unwrap()
            .build()
            .unwrap();

        let config: Config = layered.try_deserialize().unwrap();
        assert_eq!(config.database.backend, StoreBackend::Memory);
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.url, None);
    }
}
