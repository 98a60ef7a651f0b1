use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

use aws_lambda_events::{
    encodings::Base64Data,
    firehose::{
        KinesisFirehoseResponse, KinesisFirehoseResponseRecord,
        KinesisFirehoseResponseRecordMetadata,
    },
};
use tracing::{info, warn};

use crate::{
    firehose::{count_results, FirehoseEvent, FirehoseRecord, RecordResult},
    partition::{PartitionKeys, PartitionTimeZone},
    processor::{PayloadProcessor, ProcessingFailure},
};

/// Transforms every record of the batch, one output record per input record, in input order.
/// A failing record never stops the rest of the batch.
pub fn transform_batch(
    event: &FirehoseEvent,
    processor: &dyn PayloadProcessor,
    zone: &PartitionTimeZone,
) -> KinesisFirehoseResponse {
    info!(
        invocation_id = event.invocation_id.as_deref().unwrap_or("-"),
        delivery_stream_arn = event.delivery_stream_arn.as_deref().unwrap_or("-"),
        records = event.records.len(),
        time_zone = %zone,
        "Processing batch"
    );
    let records = event
        .records
        .iter()
        .map(|record| transform_record(record, processor, zone))
        .collect::<Vec<_>>();
    let response = KinesisFirehoseResponse { records };
    info!(
        total = response.records.len(),
        ok = count_results(&response, RecordResult::Ok),
        failed = count_results(&response, RecordResult::ProcessingFailed),
        "Finished processing batch"
    );
    response
}

pub fn transform_record(
    record: &FirehoseRecord,
    processor: &dyn PayloadProcessor,
    zone: &PartitionTimeZone,
) -> KinesisFirehoseResponseRecord {
    info!(record_id = %record.record_id, "Processing record");
    // keys are fixed before the processor runs so both outcomes carry the same ones
    let partition_keys =
        PartitionKeys::from_timestamp_millis(record.approximate_arrival_timestamp, zone);
    let (original, outcome) = match record.decode_data() {
        Ok(bytes) => {
            let outcome = match partition_keys {
                Some(_) => process_payload(&bytes, processor),
                None => Err(ProcessingFailure::InvalidTimestamp(
                    record.approximate_arrival_timestamp,
                )),
            };
            (bytes, outcome)
        }
        // nothing was decoded, so hand back the text that arrived
        Err(err) => (record.data.clone().into_bytes(), Err(err.into())),
    };
    let (result, data) = match outcome {
        Ok(transformed) => (RecordResult::Ok, transformed),
        Err(failure) => {
            warn!(record_id = %record.record_id, error = %failure, "Record processing failed");
            (RecordResult::ProcessingFailed, original)
        }
    };
    KinesisFirehoseResponseRecord {
        record_id: Some(record.record_id.clone()),
        result: Some(result.as_str().to_string()),
        data: Base64Data(data),
        metadata: KinesisFirehoseResponseRecordMetadata {
            partition_keys: partition_keys
                .map(PartitionKeys::into_map)
                .unwrap_or_default(),
        },
    }
}

fn process_payload(
    original: &[u8],
    processor: &dyn PayloadProcessor,
) -> Result<Vec<u8>, ProcessingFailure> {
    let payload = std::str::from_utf8(original)?;
    // the panic itself is reported by the hook installed in `init_tracing`
    let output = panic::catch_unwind(AssertUnwindSafe(|| processor.process(payload)))
        .map_err(|panic| ProcessingFailure::Panicked(panic_message(panic)))?
        .map_err(ProcessingFailure::Processor)?;
    Ok(output.into_bytes())
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
