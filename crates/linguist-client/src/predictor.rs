use std::sync::Arc;

use linguist_config::service::ServiceConfig;
use linguist_config::transport::TransportConfig;
use linguist_core::decode::{decode_completion, decode_languages};
use linguist_core::model::CompletionResult;
use linguist_core::request::endpoints;
use linguist_core::{Result, Transport};
use linguist_types::Language;

use crate::gateway::{Call, Gateway};
use crate::http::HttpTransport;

const DEFAULT_LIMIT: u32 = 1;

#[derive(Clone)]
pub struct Predictor {
    gateway: Gateway,
}

impl Predictor {
    pub fn new(config: ServiceConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        Ok(Self {
            gateway: Gateway::new(config, transport)?,
        })
    }

    pub fn connect(config: ServiceConfig, transport: &TransportConfig) -> Result<Self> {
        let http = HttpTransport::new(config.base_url.clone(), transport)?;
        Self::new(config, Arc::new(http))
    }

    pub fn directions(&self) -> Call<Vec<Language>> {
        let request = self.gateway.request(endpoints::GET_LANGS);
        self.gateway.call(request, decode_languages)
    }

    /// Suggest up to `limit` continuations of `text`.
    pub fn complete(
        &self,
        text: &str,
        language: Language,
        limit: Option<u32>,
    ) -> Call<CompletionResult> {
        let request = self
            .gateway
            .request(endpoints::COMPLETE)
            .with_query("lang", language)
            .with_query("q", text)
            .with_query("limit", limit.unwrap_or(DEFAULT_LIMIT));

        let text = text.to_string();
        self.gateway
            .call(request, move |body| decode_completion(&text, body))
    }
}
