use std::env;

use thiserror::Error;

use crate::partition::PartitionTimeZone;

pub const PARTITION_TIMEZONE: &str = "PARTITION_TIMEZONE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub partition_time_zone: PartitionTimeZone,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let partition_time_zone = match lookup(PARTITION_TIMEZONE) {
            Some(value) if !value.trim().is_empty() => value
                .parse::<PartitionTimeZone>()
                .map_err(|reason| ConfigError::InvalidValue {
                    name: PARTITION_TIMEZONE,
                    reason,
                })?,
            _ => PartitionTimeZone::default(),
        };
        Ok(Config {
            partition_time_zone,
        })
    }
}
