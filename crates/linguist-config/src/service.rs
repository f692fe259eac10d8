use std::env;

use linguist_types::{ResponseFormat, Version};
use serde::{Deserialize, Serialize};

pub const TRANSLATOR_URL: &str = "https://translate.yandex.net";
pub const DICTIONARY_URL: &str = "https://dictionary.yandex.net";
pub const PREDICTOR_URL: &str = "https://predictor.yandex.net";
pub const SPELLER_URL: &str = "https://speller.yandex.net";

pub const TRANSLATOR_KEY_VAR: &str = "LINGUIST_TRANSLATOR_KEY";
pub const DICTIONARY_KEY_VAR: &str = "LINGUIST_DICTIONARY_KEY";
pub const PREDICTOR_KEY_VAR: &str = "LINGUIST_PREDICTOR_KEY";

/// Fixed settings of one remote service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// API key, sent as the `key` query parameter. The speller ignores it.
    /// Left out of a config file, it is read from the environment.
    #[serde(default)]
    pub key: String,
    pub version: Version,
    pub format: ResponseFormat,
    pub base_url: String,
}

impl ServiceConfig {
    pub fn translator() -> Self {
        Self {
            key: env::var(TRANSLATOR_KEY_VAR).unwrap_or_default(),
            version: Version::TranslateLatest,
            format: ResponseFormat::TranslateJson,
            base_url: env_url("LINGUIST_TRANSLATOR_URL", TRANSLATOR_URL),
        }
    }

    pub fn dictionary() -> Self {
        Self {
            key: env::var(DICTIONARY_KEY_VAR).unwrap_or_default(),
            version: Version::DictionaryLatest,
            format: ResponseFormat::DictionaryJson,
            base_url: env_url("LINGUIST_DICTIONARY_URL", DICTIONARY_URL),
        }
    }

    pub fn predictor() -> Self {
        Self {
            key: env::var(PREDICTOR_KEY_VAR).unwrap_or_default(),
            version: Version::PredictorLatest,
            format: ResponseFormat::PredictorJson,
            base_url: env_url("LINGUIST_PREDICTOR_URL", PREDICTOR_URL),
        }
    }

    pub fn speller() -> Self {
        Self {
            key: String::new(),
            version: Version::SpellerLatest,
            format: ResponseFormat::SpellerJson,
            base_url: env_url("LINGUIST_SPELLER_URL", SPELLER_URL),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Fill an empty key from `lookup(var)`
    pub(crate) fn fill_key(&mut self, var: &str, lookup: &impl Fn(&str) -> Option<String>) {
        if self.key.is_empty() {
            if let Some(key) = lookup(var) {
                self.key = key;
            }
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn env_url(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
