use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::service::{DICTIONARY_KEY_VAR, PREDICTOR_KEY_VAR, ServiceConfig, TRANSLATOR_KEY_VAR};
use self::transport::TransportConfig;

pub mod service;
pub mod transport;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "ServiceConfig::translator")]
    pub translator: ServiceConfig,
    #[serde(default = "ServiceConfig::dictionary")]
    pub dictionary: ServiceConfig,
    #[serde(default = "ServiceConfig::predictor")]
    pub predictor: ServiceConfig,
    #[serde(default = "ServiceConfig::speller")]
    pub speller: ServiceConfig,
    #[serde(default = "TransportConfig::new")]
    pub transport: TransportConfig,
}

impl Config {
    /// Build every section from the environment
    pub fn new() -> Self {
        Config {
            translator: ServiceConfig::translator(),
            dictionary: ServiceConfig::dictionary(),
            predictor: ServiceConfig::predictor(),
            speller: ServiceConfig::speller(),
            transport: TransportConfig::new(),
        }
    }

    /// Load a JSON config file. Missing sections and keys fall back to the
    /// environment.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)?;
        Ok(config.with_keys_from(|var| env::var(var).ok()))
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        Ok(config.with_keys_from(|var| env::var(var).ok()))
    }

    fn with_keys_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        self.translator.fill_key(TRANSLATOR_KEY_VAR, &lookup);
        self.dictionary.fill_key(DICTIONARY_KEY_VAR, &lookup);
        self.predictor.fill_key(PREDICTOR_KEY_VAR, &lookup);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use linguist_types::{ResponseFormat, Version};

    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::from_json(
            r#"{
                "dictionary": {
                    "key": "dict.1.1.abc",
                    "version": "v1",
                    "format": "dicservice.json",
                    "base_url": "http://127.0.0.1:9000"
                },
                "transport": { "timeout_seconds": 5 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.dictionary.key, "dict.1.1.abc");
        assert_eq!(config.dictionary.version, Version::DictionaryV1);
        assert_eq!(config.dictionary.format, ResponseFormat::DictionaryJson);
        assert_eq!(config.dictionary.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.transport.timeout_seconds, 5);
        assert_eq!(config.transport.worker_threads, 2);
        assert_eq!(config.speller.format, ResponseFormat::SpellerJson);
    }

    #[test]
    fn test_missing_key_falls_back_to_environment() {
        let config: Config = serde_json::from_str(
            r#"{
                "translator": { "version": "v1.5", "format": "tr.json", "base_url": "x" },
                "predictor": { "key": "pdct.file", "version": "v1", "format": "predict.json", "base_url": "x" }
            }"#,
        )
        .unwrap();

        let config = config.with_keys_from(|var| match var {
            TRANSLATOR_KEY_VAR => Some("trnsl.env".to_string()),
            PREDICTOR_KEY_VAR => Some("pdct.env".to_string()),
            _ => None,
        });

        assert_eq!(config.translator.key, "trnsl.env");
        assert_eq!(config.predictor.key, "pdct.file");
        assert_eq!(config.speller.key, "");
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = Config::from_json(
            r#"{ "speller": { "version": "?", "format": "yaml", "base_url": "x" } }"#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_service_builders() {
        let config = ServiceConfig::translator()
            .with_key("trnsl.1.1.key")
            .with_base_url("http://localhost:1");
        assert_eq!(config.key, "trnsl.1.1.key");
        assert_eq!(config.base_url, "http://localhost:1");
        assert_eq!(config.format, ResponseFormat::TranslateJson);
    }
}
