//! Kinesis Data Firehose transformation for dynamic partitioning.
//!
//! Every record of a Firehose batch is decoded, run through a [`PayloadProcessor`],
//! re-encoded and tagged with `year`/`month`/`day`/`hour` partition keys derived from
//! its arrival timestamp. Records that cannot be processed are handed back as
//! `ProcessingFailed` with their original payload, without affecting the rest of the batch.

pub mod config;
pub mod firehose;
pub mod handler;
pub mod partition;
pub mod processor;
pub mod transform;

pub use config::{Config, ConfigError};
pub use firehose::{FirehoseEvent, FirehoseRecord, RecordResult};
pub use handler::{function_handler, init_tracing, install_panic_hook};
pub use partition::{PartitionKeys, PartitionTimeZone};
pub use processor::{Passthrough, PayloadProcessor, ProcessingFailure};
pub use transform::{transform_batch, transform_record};

pub type OpaqueError = Box<dyn std::error::Error + Send + Sync + 'static>;
