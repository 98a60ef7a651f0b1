use aws_lambda_events::firehose::KinesisFirehoseResponse;
use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    DecodeError, Engine,
};
use serde::Deserialize;

/// Standard alphabet with padding required, tolerating non-zero trailing bits.
const DATA_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct FirehoseEvent {
    #[serde(default)]
    pub invocation_id: Option<String>,
    #[serde(default)]
    pub delivery_stream_arn: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    pub records: Vec<FirehoseRecord>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FirehoseRecord {
    pub record_id: String,
    /// Base64 encoded payload, exactly as Firehose delivered it.
    pub data: String,
    /// Milliseconds since the Unix epoch.
    pub approximate_arrival_timestamp: i64,
}

impl FirehoseRecord {
    /// Decodes `data`, skipping characters outside the base64 alphabet such as line breaks.
    pub fn decode_data(&self) -> Result<Vec<u8>, DecodeError> {
        let cleaned = self
            .data
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
            .collect::<String>();
        DATA_ENGINE.decode(cleaned)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordResult {
    Ok,
    ProcessingFailed,
}

impl RecordResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordResult::Ok => "Ok",
            RecordResult::ProcessingFailed => "ProcessingFailed",
        }
    }
}

pub fn count_results(response: &KinesisFirehoseResponse, result: RecordResult) -> usize {
    response
        .records
        .iter()
        .filter(|r| r.result.as_deref() == Some(result.as_str()))
        .count()
}
