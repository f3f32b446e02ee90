use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub organisation_config: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://notifications.db?mode=rwc".to_string());

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let organisation_config =
            env::var("ORGANISATION_CONFIG").unwrap_or_else(|_| "organisation.json".to_string());

        Ok(Config {
            database_url,
            server_host,
            server_port,
            organisation_config,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_address_joins_host_and_port() {
        let config = Config {
            database_url: "sqlite://notifications.db?mode=rwc".to_string(),
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            organisation_config: "organisation.json".to_string(),
        };

        assert_eq!(config.server_address(), "0.0.0.0:8080");
        assert!(config.server_address().parse::<std::net::SocketAddr>().is_ok());
    }
}
