use std::sync::Arc;

use linguist_config::service::ServiceConfig;
use linguist_config::transport::TransportConfig;
use linguist_core::decode::{decode_detected_language, decode_language_names, decode_translation};
use linguist_core::model::TranslationResult;
use linguist_core::request::{combine_options, encode_hints, endpoints, language_direction};
use linguist_core::{Result, Transport};
use linguist_types::{Format, Language, TextOption};

use crate::gateway::{Call, Gateway};
use crate::http::HttpTransport;

#[derive(Clone)]
pub struct Translator {
    gateway: Gateway,
}

impl Translator {
    pub fn new(config: ServiceConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        Ok(Self {
            gateway: Gateway::new(config, transport)?,
        })
    }

    pub fn connect(config: ServiceConfig, transport: &TransportConfig) -> Result<Self> {
        let http = HttpTransport::new(config.base_url.clone(), transport)?;
        Self::new(config, Arc::new(http))
    }

    /// Languages the translator accepts, named in English
    pub fn directions(&self) -> Call<Vec<Language>> {
        let request = self
            .gateway
            .request(endpoints::GET_LANGS)
            .with_query("ui", Language::English);

        self.gateway.call(request, decode_language_names)
    }

    /// Detect the language of `text`, preferring any of `hints`.
    pub fn detect<I>(&self, text: &str, hints: I) -> Call<Language>
    where
        I: IntoIterator,
        I::Item: Into<Option<Language>>,
    {
        let hint = encode_hints(hints);

        let request = self
            .gateway
            .request(endpoints::DETECT)
            .with_query("text", text)
            .with_optional_query("hint", (!hint.is_empty()).then_some(hint));

        self.gateway.call(request, decode_detected_language)
    }

    /// Translate `text` into `to`. Without `from` the service detects the
    /// source and reports it back.
    pub fn translate<I>(
        &self,
        text: &str,
        from: Option<Language>,
        to: Language,
        format: Format,
        options: I,
    ) -> Call<TranslationResult>
    where
        I: IntoIterator,
        I::Item: Into<Option<TextOption>>,
    {
        let request = self
            .gateway
            .request(endpoints::TRANSLATE)
            .with_query("text", text)
            .with_query("lang", language_direction(from, to))
            .with_query("format", format)
            .with_query("options", combine_options(options));

        let text = text.to_string();
        self.gateway
            .call(request, move |body| decode_translation(&text, body))
    }
}
