use crate::collectors::command;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

const PROC_UPTIME: &str = "/proc/uptime";
const BOOT_TIME_QUERY: [&str; 2] = ["uptime", "-s"];
const BOOT_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UptimeError {
    #[error("unsupported boot time format: {0:?}")]
    UnsupportedFormat(String),
    #[error("boot time {0:?} does not exist in the local time zone")]
    NonexistentLocalTime(String),
    #[error("boot time {0} lies in the future")]
    BootInFuture(DateTime<Utc>),
}

#[derive(Debug, Clone)]
pub struct UptimeReader {
    pub proc_path: PathBuf,
    pub boot_time_argv: Vec<String>,
}

impl Default for UptimeReader {
    fn default() -> Self {
        Self {
            proc_path: PathBuf::from(PROC_UPTIME),
            boot_time_argv: BOOT_TIME_QUERY.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl UptimeReader {
    pub fn uptime_seconds(&self) -> u64 {
        let content = fs::read_to_string(&self.proc_path).unwrap_or_default();
        if !content.trim().is_empty() {
            if let Some(secs) = parse_proc_uptime(&content) {
                return secs;
            }
            debug!(path = %self.proc_path.display(), "unparsable uptime counter");
        }

        let argv: Vec<&str> = self.boot_time_argv.iter().map(String::as_str).collect();
        let output = command::run(&argv);
        if let Some(reason) = output.degradation() {
            debug!(%reason, "boot time query unavailable");
            return 0;
        }
        if output.text().trim().is_empty() {
            return 0;
        }
        match parse_boot_time(output.text(), &Local, Utc::now()) {
            Ok(secs) => secs,
            Err(err) => {
                warn!(error = %err, "cannot derive uptime from boot time");
                0
            }
        }
    }
}

pub fn parse_proc_uptime(content: &str) -> Option<u64> {
    let secs: f64 = content.split_whitespace().next()?.parse().ok()?;
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }
    Some(secs as u64)
}

pub fn parse_boot_time<Tz: TimeZone>(
    text: &str,
    tz: &Tz,
    now: DateTime<Utc>,
) -> Result<u64, UptimeError> {
    let trimmed = text.trim();
    let naive = BOOT_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| UptimeError::UnsupportedFormat(trimmed.to_string()))?;

    let boot = tz
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| UptimeError::NonexistentLocalTime(trimmed.to_string()))?
        .with_timezone(&Utc);

    let elapsed = now.signed_duration_since(boot).num_seconds();
    u64::try_from(elapsed).map_err(|_| UptimeError::BootInFuture(boot))
}
