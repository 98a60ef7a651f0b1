use std::{collections::HashMap, fmt, str::FromStr};

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

/// Time zone used to bucket arrival timestamps into partition keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartitionTimeZone {
    Utc,
    /// Whatever the host considers local time (`TZ` on Lambda, which is UTC unless overridden).
    #[default]
    Local,
    Named(Tz),
}

impl FromStr for PartitionTimeZone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("utc") {
            return Ok(PartitionTimeZone::Utc);
        }
        if s.eq_ignore_ascii_case("local") {
            return Ok(PartitionTimeZone::Local);
        }
        s.parse::<Tz>()
            .map(PartitionTimeZone::Named)
            .map_err(|_| format!("unknown time zone: {}", s))
    }
}

impl fmt::Display for PartitionTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionTimeZone::Utc => write!(f, "UTC"),
            PartitionTimeZone::Local => write!(f, "local"),
            PartitionTimeZone::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionKeys {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
}

impl PartitionKeys {
    pub fn from_timestamp_millis(millis: i64, zone: &PartitionTimeZone) -> Option<Self> {
        let utc = DateTime::<Utc>::from_timestamp_millis(millis)?;
        let keys = match zone {
            PartitionTimeZone::Utc => Self::from_datetime(&utc),
            PartitionTimeZone::Local => Self::from_datetime(&utc.with_timezone(&Local)),
            PartitionTimeZone::Named(tz) => Self::from_datetime(&utc.with_timezone(tz)),
        };
        Some(keys)
    }

    fn from_datetime<Z: TimeZone>(datetime: &DateTime<Z>) -> Self {
        PartitionKeys {
            year: format!("{:04}", datetime.year()),
            month: format!("{:02}", datetime.month()),
            day: format!("{:02}", datetime.day()),
            hour: format!("{:02}", datetime.hour()),
        }
    }

    pub fn into_map(self) -> HashMap<String, String> {
        HashMap::from([
            ("year".to_string(), self.year),
            ("month".to_string(), self.month),
            ("day".to_string(), self.day),
            ("hour".to_string(), self.hour),
        ])
    }
}
