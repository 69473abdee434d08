use std::env;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_port_var(env::var("PORT").ok().as_deref())
    }

    fn from_port_var(value: Option<&str>) -> Result<Self, ConfigError> {
        let port = match value {
            None => DEFAULT_PORT,
            Some("") => DEFAULT_PORT,
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?,
        };
        Ok(Self { port })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_port_defaults_to_3000() {
        let config = ServerConfig::from_port_var(None).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn empty_port_defaults_to_3000() {
        let config = ServerConfig::from_port_var(Some("")).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn numeric_port_is_used() {
        let config = ServerConfig::from_port_var(Some("8080")).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let err = ServerConfig::from_port_var(Some("eight")).unwrap_err();
        assert_eq!(err.to_string(), "invalid PORT value 'eight'");
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        assert!(ServerConfig::from_port_var(Some("70000")).is_err());
    }
}
