use std::sync::Arc;

use linguist_config::service::ServiceConfig;
use linguist_config::transport::TransportConfig;
use linguist_core::decode::{decode_spelling, decode_spelling_batch};
use linguist_core::model::SpellCheckResult;
use linguist_core::request::{combine_options, endpoints};
use linguist_core::{Result, Transport};
use linguist_types::{Format, Language, TextOption};

use crate::gateway::{Call, Gateway};
use crate::http::HttpTransport;

/// Spell checker. It is served without a key or a version segment, so
/// both are ignored even when configured.
#[derive(Clone)]
pub struct Speller {
    gateway: Gateway,
}

impl Speller {
    pub fn new(config: ServiceConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        Ok(Self {
            gateway: Gateway::new(config, transport)?,
        })
    }

    pub fn connect(config: ServiceConfig, transport: &TransportConfig) -> Result<Self> {
        let http = HttpTransport::new(config.base_url.clone(), transport)?;
        Self::new(config, Arc::new(http))
    }

    pub fn check<I>(
        &self,
        text: &str,
        language: Language,
        format: Format,
        options: I,
    ) -> Call<SpellCheckResult>
    where
        I: IntoIterator,
        I::Item: Into<Option<TextOption>>,
    {
        let request = self
            .gateway
            .keyless_request(endpoints::CHECK_TEXT)
            .with_query("text", text)
            .with_query("lang", language)
            .with_query("options", combine_options(options))
            .with_query("format", format);

        let text = text.to_string();
        self.gateway
            .call(request, move |body| decode_spelling(&text, body))
    }

    /// Check several phrases in one request. Results keep the order of
    /// `phrases`.
    pub fn check_batch<S, I>(
        &self,
        phrases: &[S],
        language: Language,
        format: Format,
        options: I,
    ) -> Call<Vec<SpellCheckResult>>
    where
        S: AsRef<str>,
        I: IntoIterator,
        I::Item: Into<Option<TextOption>>,
    {
        let request = phrases
            .iter()
            .fold(self.gateway.keyless_request(endpoints::CHECK_TEXTS), |request, phrase| {
                request.with_query("text", phrase.as_ref())
            })
            .with_query("lang", language)
            .with_query("options", combine_options(options))
            .with_query("format", format);

        let phrases: Vec<String> = phrases.iter().map(|p| p.as_ref().to_string()).collect();
        self.gateway
            .call(request, move |body| decode_spelling_batch(&phrases, body))
    }
}
