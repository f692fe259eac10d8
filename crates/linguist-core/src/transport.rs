use crate::request::RequestDescriptor;

/// What came back from the wire, before any classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Option<Vec<u8>>,
    /// Reason phrase reported alongside the status
    pub message: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>, message: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(body.into()),
            message: message.into(),
        }
    }

    pub fn without_body(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: None,
            message: message.into(),
        }
    }
}

/// Connectivity failure raised by a transport
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Completion slot of an asynchronous submission
pub type OnDone = Box<dyn FnOnce(Result<RawResponse, TransportError>) + Send + 'static>;

/// Moves a request descriptor over the wire.
///
/// `submit` must return before `on_done` runs and must invoke it exactly
/// once. The thread it runs on is the implementation's choice.
pub trait Transport: Send + Sync {
    /// Blocking round trip on the calling thread
    fn execute(&self, request: &RequestDescriptor) -> Result<RawResponse, TransportError>;

    /// Queue the round trip and report through `on_done`
    fn submit(&self, request: RequestDescriptor, on_done: OnDone);
}
