//! Runs the transformation against a Firehose event JSON file (or stdin) and prints the response.
//!
//! Partition keys use this machine's local time unless `PARTITION_TIMEZONE` is set.
//!
//! ```sh
//! PARTITION_TIMEZONE=Asia/Tokyo cargo run --bin local -- event.json
//! ```
use std::{
    env, fs,
    io::{self, Read},
};

use dotenvy::dotenv;
use firehose_partitioner::{
    init_tracing, transform_batch, Config, FirehoseEvent, OpaqueError, Passthrough,
};

fn main() -> Result<(), OpaqueError> {
    dotenv().ok();
    init_tracing();
    let config = Config::from_env()?;
    let input = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let event: FirehoseEvent = serde_json::from_str(&input)?;
    let response = transform_batch(&event, &Passthrough, &config.partition_time_zone);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
