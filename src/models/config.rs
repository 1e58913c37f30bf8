//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_preview_limit() -> u32 {
    10
}

#[derive(Clone, Debug, Deserialize)]
/// Server settings shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    /// Key material for signing flash message cookies (at least 64 bytes).
    pub secret: String,
    /// Number of rows shown in the data preview.
    #[serde(default = "default_preview_limit")]
    pub preview_limit: u32,
}

#[cfg(feature = "server")]
impl ServerConfig {
    /// Loads `config/default.yaml`, the optional `config/{APP_ENV}.yaml`
    /// overlay and `APP_*` environment variables, in that order.
    pub fn load() -> Result<Self, config::ConfigError> {
        // Select config profile (defaults to `local`).
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize::<ServerConfig>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_limit_defaults_to_ten() {
        let config: ServerConfig = serde_json::from_value(serde_json::json!({
            "address": "127.0.0.1",
            "port": 8080,
            "database_url": "test.db",
            "templates_dir": "templates/**/*",
            "secret": "s",
        }))
        .unwrap();

        assert_eq!(config.preview_limit, 10);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn negative_preview_limit_is_rejected() {
        let result: Result<ServerConfig, _> = serde_json::from_value(serde_json::json!({
            "address": "127.0.0.1",
            "port": 8080,
            "database_url": "test.db",
            "templates_dir": "templates/**/*",
            "secret": "s",
            "preview_limit": -1,
        }));

        assert!(result.is_err());
    }
}
