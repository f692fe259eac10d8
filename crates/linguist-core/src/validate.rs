use linguist_types::ResponseStatus;

use crate::error::{Error, Result};
use crate::transport::RawResponse;

/// Classify a raw response, handing back the body only when decoding may
/// proceed.
pub fn validate(response: &RawResponse) -> Result<&[u8]> {
    let Ok(status) = ResponseStatus::by_code(response.status) else {
        return Err(Error::Protocol {
            code: response.status,
            message: response.message.clone(),
        });
    };

    if !status.is_ok() {
        return Err(Error::Status(status));
    }

    match response.body.as_deref() {
        Some(body) if !body.is_empty() => Ok(body),
        _ => Err(Error::EmptyBody),
    }
}
