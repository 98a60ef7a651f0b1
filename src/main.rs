use firehose_partitioner::{function_handler, init_tracing, Config, Passthrough};
use lambda_runtime::service_fn;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    init_tracing();
    let config = Config::from_env()?;
    tracing::info!(partition_time_zone = %config.partition_time_zone, "Starting");
    // swap Passthrough for the real transformation
    let processor = Passthrough;
    let config = &config;
    let processor = &processor;
    lambda_runtime::run(service_fn(move |event| async move {
        function_handler(config, processor, event).await
    }))
    .await?;
    Ok(())
}
