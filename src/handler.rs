use std::panic;

use aws_lambda_events::firehose::KinesisFirehoseResponse;
use lambda_runtime::{Error, LambdaEvent};
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    firehose::FirehoseEvent,
    processor::PayloadProcessor,
    transform::transform_batch,
};

/// Sets up the process-wide subscriber. Call once, before the runtime starts.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();
    install_panic_hook();
}

/// Reports panics through `tracing` instead of raw stderr, so a processor panic caught for a
/// single record shows up once, as a structured event.
pub fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        tracing::error!(panic = %info, "Panic in payload processing");
    }));
}

pub async fn function_handler(
    config: &Config,
    processor: &dyn PayloadProcessor,
    event: LambdaEvent<FirehoseEvent>,
) -> Result<KinesisFirehoseResponse, Error> {
    tracing::debug!(request_id = %event.context.request_id, "Received Firehose event");
    Ok(transform_batch(
        &event.payload,
        processor,
        &config.partition_time_zone,
    ))
}
