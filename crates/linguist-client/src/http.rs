use std::sync::Arc;
use std::thread;
use std::time::Duration;

use linguist_config::transport::TransportConfig;
use linguist_core::{OnDone, RawResponse, RequestDescriptor, Transport, TransportError};
use tokio::runtime::{Builder, Handle, Runtime};

/// Plain HTTP GET transport backed by `reqwest`.
///
/// Owns the runtime that drives its requests, so blocking callers need no
/// runtime of their own. Submitted requests keep that runtime alive until
/// their completion has run, even after the transport is dropped.
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
    runtime: Arc<RuntimeHost>,
}

struct RuntimeHost {
    handle: Handle,
    runtime: Option<Runtime>,
}

impl Drop for RuntimeHost {
    fn drop(&mut self) {
        let Some(runtime) = self.runtime.take() else {
            return;
        };

        // The last reference may be released on one of our own workers.
        if Handle::try_current().is_ok() {
            thread::spawn(move || runtime.shutdown_background());
        } else {
            runtime.shutdown_background();
        }
    }
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, config: &TransportConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| TransportError::with_source("failed to build HTTP client", e))?;

        let runtime = Builder::new_multi_thread()
            .worker_threads(config.worker_threads.max(1))
            .thread_name("linguist-http")
            .enable_all()
            .build()
            .map_err(|e| TransportError::with_source("failed to start transport runtime", e))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
            runtime: Arc::new(RuntimeHost {
                handle: runtime.handle().clone(),
                runtime: Some(runtime),
            }),
        })
    }

    fn url(&self, request: &RequestDescriptor) -> String {
        format!("{}{}", self.base_url, request.path())
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &RequestDescriptor) -> Result<RawResponse, TransportError> {
        if Handle::try_current().is_ok() {
            return Err(TransportError::new(
                "blocking request issued from inside an async runtime, use submit instead",
            ));
        }

        self.runtime.handle.block_on(fetch(
            self.client.clone(),
            self.url(request),
            request.query.clone(),
        ))
    }

    fn submit(&self, request: RequestDescriptor, on_done: OnDone) {
        let future = fetch(self.client.clone(), self.url(&request), request.query);
        let host = Arc::clone(&self.runtime);

        self.runtime.handle.spawn(async move {
            let _host = host;
            on_done(future.await);
        });
    }
}

async fn fetch(
    client: reqwest::Client,
    url: String,
    query: Vec<(&'static str, String)>,
) -> Result<RawResponse, TransportError> {
    // Errors are stripped of their URL, the query carries the API key.
    let response = client
        .get(&url)
        .query(&query)
        .send()
        .await
        .map_err(|e| TransportError::with_source(format!("request to {url} failed"), e.without_url()))?;

    let status = response.status();
    let message = status.canonical_reason().unwrap_or_default().to_string();

    let body = response
        .bytes()
        .await
        .map_err(|e| TransportError::with_source(format!("failed to read body from {url}"), e.without_url()))?;

    tracing::debug!(url = %url, status = status.as_u16(), bytes = body.len(), "response received");

    Ok(RawResponse::new(status.as_u16(), body.to_vec(), message))
}
