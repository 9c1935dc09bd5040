// src/config.rs
use crate::application::dto::PAYLOAD_NAMING;
use crate::domain::NamingConvention;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    field_naming: NamingConvention,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reading from an arbitrary source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        if listen_addr.trim().is_empty() {
            return Err(ConfigError::Missing("LISTEN_ADDR"));
        }

        let field_naming = match lookup("FIELD_NAMING") {
            Some(raw) => raw
                .parse::<NamingConvention>()
                .map_err(|err| ConfigError::Invalid(format!("FIELD_NAMING: {err}")))?,
            None => PAYLOAD_NAMING,
        };
        if field_naming != PAYLOAD_NAMING {
            return Err(ConfigError::Invalid(format!(
                "FIELD_NAMING must be {PAYLOAD_NAMING} to match payload serialisation, got {field_naming}"
            )));
        }

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            listen_addr,
            field_naming,
            allowed_origins,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Convention used for field names in problem payloads.
    pub const fn field_naming(&self) -> NamingConvention {
        self.field_naming
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(config.field_naming(), NamingConvention::CamelCase);
        assert_eq!(config.allowed_origins(), ["http://localhost:3000"]);
    }

    #[test]
    fn reads_naming_and_origins() {
        let config = config_from(&[
            ("FIELD_NAMING", "camel"),
            ("ALLOWED_ORIGINS", "https://a.test, https://b.test,"),
        ])
        .unwrap();
        assert_eq!(config.field_naming(), NamingConvention::CamelCase);
        assert_eq!(config.allowed_origins(), ["https://a.test", "https://b.test"]);
    }

    #[test]
    fn rejects_naming_that_disagrees_with_payloads() {
        for raw in ["snake_case", "PascalCase", "kebab", "preserve"] {
            let err = config_from(&[("FIELD_NAMING", raw)]).unwrap_err();
            assert!(
                matches!(&err, ConfigError::Invalid(msg) if msg.contains("camelCase")),
                "{raw}: {err}"
            );
        }
    }

    #[test]
    fn rejects_unknown_naming() {
        let err = config_from(&[("FIELD_NAMING", "SCREAMING")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("SCREAMING")));
    }

    #[test]
    fn rejects_blank_listen_addr() {
        let err = config_from(&[("LISTEN_ADDR", "  ")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("LISTEN_ADDR")));
    }
}
