use std::env;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8529;
pub const DEFAULT_DATABASE: &str = "sandbox";
pub const DEFAULT_COLLECTION: &str = "brain";

/// Collection used by the query probe; fixed, not configurable.
pub const PROBE_COLLECTION: &str = "graph";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub collection: String,
    pub base_url: String,
}

impl Config {
    /// Build the configuration once from the process environment.
    /// Missing or invalid values fall back to defaults; a non-numeric
    /// DB_PORT degrades to the default port rather than failing.
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("DB_HOST").ok(),
            env::var("DB_PORT").ok(),
            env::var("DB_NAME").ok(),
            env::var("DB_COLLECTION").ok(),
        )
    }

    fn from_vars(
        host: Option<String>,
        port: Option<String>,
        database: Option<String>,
        collection: Option<String>,
    ) -> Self {
        let host = host
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = port
            .and_then(|p| p.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let database = database
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());
        let collection = collection
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_COLLECTION.to_string());
        let base_url = format!("http://{}:{}", host, port);

        Self {
            host,
            port,
            database,
            collection,
            base_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_env_unset() {
        let config = Config::from_vars(None, None, None, None);
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8529);
        assert_eq!(config.database, "sandbox");
        assert_eq!(config.collection, "brain");
        assert_eq!(config.base_url, "http://localhost:8529");
    }

    #[test]
    fn test_explicit_values() {
        let config = Config::from_vars(
            Some("db.internal".to_string()),
            Some("9000".to_string()),
            Some("staging".to_string()),
            Some("notes".to_string()),
        );
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 9000);
        assert_eq!(config.database, "staging");
        assert_eq!(config.collection, "notes");
        assert_eq!(config.base_url, "http://db.internal:9000");
    }

    #[test]
    fn test_non_numeric_port_falls_back() {
        let config = Config::from_vars(None, Some("notanumber".to_string()), None, None);
        assert_eq!(config.port, 8529);
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config = Config::from_vars(
            Some(String::new()),
            Some(String::new()),
            Some(String::new()),
            Some(String::new()),
        );
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8529);
        assert_eq!(config.database, "sandbox");
        assert_eq!(config.collection, "brain");
    }
}
