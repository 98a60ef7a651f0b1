use std::str::Utf8Error;

use thiserror::Error;

use crate::OpaqueError;

/// Business logic applied to the decoded text of every record.
pub trait PayloadProcessor: Send + Sync {
    fn process(&self, payload: &str) -> Result<String, OpaqueError>;
}

impl<F, E> PayloadProcessor for F
where
    F: Fn(&str) -> Result<String, E> + Send + Sync,
    E: Into<OpaqueError>,
{
    fn process(&self, payload: &str) -> Result<String, OpaqueError> {
        self(payload).map_err(Into::into)
    }
}

/// Placeholder processor deployed until real transformation logic is plugged in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl PayloadProcessor for Passthrough {
    fn process(&self, payload: &str) -> Result<String, OpaqueError> {
        Ok(payload.to_string())
    }
}

/// Why a single record was reported back as `ProcessingFailed`.
#[derive(Debug, Error)]
pub enum ProcessingFailure {
    #[error("arrival timestamp {0} is out of range")]
    InvalidTimestamp(i64),

    #[error("payload is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),

    #[error("processor failed: {0}")]
    Processor(#[source] OpaqueError),

    #[error("processor panicked: {0}")]
    Panicked(String),
}
