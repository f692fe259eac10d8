pub mod decode;
pub mod error;
pub mod model;
pub mod request;
pub mod transport;
pub mod validate;

pub use error::{Error, Result};
pub use request::RequestDescriptor;
pub use transport::{OnDone, RawResponse, Transport, TransportError};
pub use validate::validate;
