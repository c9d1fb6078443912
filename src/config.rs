use std::env;

use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Reads `HOST`, `PORT` and `ALLOWED_ORIGINS`. Call after `dotenv` so a
    /// local `.env` is honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(p) => p
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {:?}", p))?,
            None => DEFAULT_PORT,
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string())
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            host,
            port,
            allowed_origins,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.bind_address(), "0.0.0.0:3000");
        assert_eq!(
            cfg.allowed_origins,
            vec!["http://localhost:3000", "http://127.0.0.1:3000"]
        );
    }

    #[test]
    fn reads_overrides() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", " 8080 "),
            ("ALLOWED_ORIGINS", "https://a.example, ,https://b.example"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_address(), "127.0.0.1:8080");
        assert_eq!(cfg.allowed_origins, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn rejects_bad_port() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
