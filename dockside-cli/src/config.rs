//! Optional config file: ~/.dockside/config.toml
//!
//! ```toml
//! [quiz]
//! bind = "127.0.0.1:5000"
//! questions = "/etc/dockside/questions.toml"
//!
//! [items]
//! bind = "0.0.0.0:5000"
//! database_url = "postgres://localhost/items"
//! connection_mode = "pooled"
//! max_connections = 5
//! bootstrap_schema = true
//! cors_permissive = true
//! static_dir = "./frontend"
//! ```
//!
//! Command-line flags and environment variables win over anything here.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dockside_items::ConnectionMode;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocksideConfig {
    pub quiz: QuizSection,
    pub items: ItemsSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuizSection {
    pub bind: Option<SocketAddr>,
    pub questions: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ItemsSection {
    pub bind: Option<SocketAddr>,
    pub database_url: Option<String>,
    pub connection_mode: Option<ConnectionMode>,
    pub max_connections: Option<u32>,
    pub bootstrap_schema: Option<bool>,
    pub cors_permissive: Option<bool>,
    pub static_dir: Option<PathBuf>,
}

impl DocksideConfig {
    /// Default location: ~/.dockside/config.toml
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".dockside/config.toml")
    }

    /// Load the config file.
    ///
    /// An explicit path must exist. The default path is optional: when it is
    /// missing an empty config is returned.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::default_path();
                if !path.exists() {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "config file loaded");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_is_all_defaults() {
        let config = DocksideConfig::from_toml_str("").unwrap();
        assert!(config.quiz.bind.is_none());
        assert!(config.items.database_url.is_none());
    }

    #[test]
    fn parses_both_sections() {
        let config = DocksideConfig::from_toml_str(
            r#"
            [quiz]
            bind = "127.0.0.1:8081"

            [items]
            connection_mode = "pooled"
            max_connections = 12
            cors_permissive = false
            "#,
        )
        .unwrap();

        assert_eq!(config.quiz.bind.unwrap().port(), 8081);
        assert_eq!(config.items.connection_mode, Some(ConnectionMode::Pooled));
        assert_eq!(config.items.max_connections, Some(12));
        assert_eq!(config.items.cors_permissive, Some(false));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(DocksideConfig::from_toml_str("[items]\nport = 1").is_err());
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = DocksideConfig::load(Some(Path::new("/nonexistent/dockside.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn loads_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[items]\ndatabase_url = \"postgres://localhost/items\"").unwrap();

        let config = DocksideConfig::load(Some(file.path())).unwrap();
        assert_eq!(
            config.items.database_url.as_deref(),
            Some("postgres://localhost/items")
        );
    }
}
