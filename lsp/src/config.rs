//! TOML-backed configuration for the bridge.
//!
//! Everything is defaulted: a missing or empty config file yields the
//! stock identity (analyzer binary `rust-analyzer`, descriptor named
//! "Rust Language Extension", notify-on-failure enabled).

use std::path::Path;

use serde::Deserialize;

use oxidation_types::ClientDescriptor;

/// Executable name of the bundled analyzer, without platform suffix.
pub const DEFAULT_ANALYZER_BIN: &str = "rust-analyzer";

/// Error loading or parsing a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading config file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config file {path}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Configuration for the connection lifecycle manager.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Analyzer executable name inside the `res/` directory. The platform
    /// executable suffix is appended at path resolution, not stored here.
    analyzer_bin: String,
    /// Static descriptor forwarded to the host's protocol engine.
    client: ClientDescriptor,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            analyzer_bin: DEFAULT_ANALYZER_BIN.to_string(),
            client: ClientDescriptor::default(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    #[must_use]
    pub fn analyzer_bin(&self) -> &str {
        &self.analyzer_bin
    }

    #[must_use]
    pub fn client(&self) -> &ClientDescriptor {
        &self.client
    }

    /// Consume the config, yielding its parts.
    #[must_use]
    pub(crate) fn into_parts(self) -> (String, ClientDescriptor) {
        (self.analyzer_bin, self.client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.analyzer_bin(), "rust-analyzer");
        assert_eq!(config.client().name(), "Rust Language Extension");
        assert!(config.client().show_notification_on_initialize_failed());
    }

    #[test]
    fn test_parse_empty_toml_is_default() {
        let config: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(config.analyzer_bin(), "rust-analyzer");
    }

    #[test]
    fn test_parse_full_toml() {
        let config: ClientConfig = toml::from_str(
            r#"
            analyzer_bin = "rust-analyzer-nightly"

            [client]
            name = "Nightly Bridge"
            configuration_sections = ["rust"]
            files_to_watch = ["Cargo.toml", "Cargo.lock"]
            show_notification_on_initialize_failed = false
            "#,
        )
        .unwrap();
        assert_eq!(config.analyzer_bin(), "rust-analyzer-nightly");
        assert_eq!(config.client().name(), "Nightly Bridge");
        assert_eq!(config.client().configuration_sections(), ["rust"]);
        assert_eq!(
            config.client().files_to_watch().unwrap(),
            ["Cargo.toml", "Cargo.lock"]
        );
        assert!(!config.client().show_notification_on_initialize_failed());
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        let result: Result<ClientConfig, _> = toml::from_str("analyser_bin = \"typo\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = ClientConfig::load(Path::new("/nonexistent/oxidation.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "analyzer_bin = [not toml").unwrap();
        let err = ClientConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "analyzer_bin = \"ra-custom\"").unwrap();
        let config = ClientConfig::load(file.path()).unwrap();
        assert_eq!(config.analyzer_bin(), "ra-custom");
    }
}
