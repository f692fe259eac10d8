use std::sync::Arc;

use linguist_config::service::ServiceConfig;
use linguist_core::{
    Error, RawResponse, RequestDescriptor, Result, Transport, TransportError, validate,
};

/// Turns a validated body into an operation's model
pub type Decoder<R> = Box<dyn FnOnce(&[u8]) -> Result<R> + Send + 'static>;

/// Fixed configuration of one service plus the transport it talks through
#[derive(Clone)]
pub struct Gateway {
    config: Arc<ServiceConfig>,
    transport: Arc<dyn Transport>,
}

impl Gateway {
    /// Only the JSON response formats can be decoded.
    pub fn new(config: ServiceConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        if !config.format.is_json() {
            return Err(Error::Config(format!(
                "unsupported response format `{}`",
                config.format
            )));
        }

        Ok(Self {
            config: Arc::new(config),
            transport,
        })
    }

    /// Descriptor with the version and interface segments and the key
    pub fn request(&self, path_template: &'static str) -> RequestDescriptor {
        RequestDescriptor::new(path_template)
            .with_path_param("version", self.config.version)
            .with_path_param("interface", self.config.format)
            .with_query("key", &self.config.key)
    }

    /// Descriptor with the interface segment only, for services that are
    /// neither versioned nor keyed
    pub fn keyless_request(&self, path_template: &'static str) -> RequestDescriptor {
        RequestDescriptor::new(path_template).with_path_param("interface", self.config.format)
    }

    pub fn call<R, D>(&self, request: RequestDescriptor, decoder: D) -> Call<R>
    where
        D: FnOnce(&[u8]) -> Result<R> + Send + 'static,
    {
        Call {
            transport: Arc::clone(&self.transport),
            request,
            decoder: Box::new(decoder),
        }
    }
}

/// A prepared operation, run either blocking with [`Call::send`] or in the
/// background with [`Call::submit`].
pub struct Call<R> {
    transport: Arc<dyn Transport>,
    request: RequestDescriptor,
    decoder: Decoder<R>,
}

impl<R: Send + 'static> Call<R> {
    pub fn request(&self) -> &RequestDescriptor {
        &self.request
    }

    /// Blocks the calling thread until the decoded model or the first
    /// error is available.
    pub fn send(self) -> Result<R> {
        let path = self.request.path();
        tracing::debug!(path = %path, "sending request");

        let outcome = self.transport.execute(&self.request);
        complete(&path, outcome, self.decoder)
    }

    /// Hands the request to the transport and returns. `handler` runs
    /// exactly once, on a thread the transport picks.
    pub fn submit<F>(self, handler: F)
    where
        F: FnOnce(Result<R>) + Send + 'static,
    {
        let Call {
            transport,
            request,
            decoder,
        } = self;

        let path = request.path();
        tracing::debug!(path = %path, "submitting request");

        transport.submit(
            request,
            Box::new(move |outcome| handler(complete(&path, outcome, decoder))),
        );
    }
}

fn complete<R>(
    path: &str,
    outcome: std::result::Result<RawResponse, TransportError>,
    decoder: Decoder<R>,
) -> Result<R> {
    let result = outcome.map_err(Error::from).and_then(|response| {
        let body = validate(&response)?;
        decoder(body)
    });

    if let Err(error) = &result {
        tracing::warn!(path, %error, "request failed");
    }

    result
}
