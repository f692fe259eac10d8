use std::sync::Arc;

use linguist_config::service::ServiceConfig;
use linguist_config::transport::TransportConfig;
use linguist_core::decode::{decode_language_pairs, decode_lookup};
use linguist_core::model::LookupResult;
use linguist_core::request::{combine_flags, endpoints};
use linguist_core::{Result, Transport};
use linguist_types::{Flag, Language, LanguagePair};

use crate::gateway::{Call, Gateway};
use crate::http::HttpTransport;

#[derive(Clone)]
pub struct Dictionary {
    gateway: Gateway,
}

impl Dictionary {
    pub fn new(config: ServiceConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        Ok(Self {
            gateway: Gateway::new(config, transport)?,
        })
    }

    pub fn connect(config: ServiceConfig, transport: &TransportConfig) -> Result<Self> {
        let http = HttpTransport::new(config.base_url.clone(), transport)?;
        Self::new(config, Arc::new(http))
    }

    pub fn directions(&self) -> Call<Vec<LanguagePair>> {
        let request = self.gateway.request(endpoints::GET_LANGS);
        self.gateway.call(request, decode_language_pairs)
    }

    /// Look `text` up in the `pair` dictionary. Attribute values come back
    /// in `ui`, English when not given.
    pub fn lookup<I>(
        &self,
        text: &str,
        pair: LanguagePair,
        ui: Option<Language>,
        flags: I,
    ) -> Call<LookupResult>
    where
        I: IntoIterator,
        I::Item: Into<Option<Flag>>,
    {
        let request = self
            .gateway
            .request(endpoints::LOOKUP)
            .with_query("lang", pair)
            .with_query("text", text)
            .with_query("ui", ui.unwrap_or(Language::English))
            .with_query("flags", combine_flags(flags));

        self.gateway.call(request, decode_lookup)
    }
}
