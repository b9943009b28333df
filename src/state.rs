use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const EXIT_ATTENTION: u8 = 2;
pub const EXIT_HEALTHY: u8 = 0;

// Field order is alphabetical so serialized keys come out sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub disk_alerts: Vec<DiskAlert>,
    pub failed_services: Vec<String>,
    pub hostname: String,
    pub load_average: LoadAverage,
    pub platform: String,
    pub runtime_version: String,
    pub timestamp: DateTime<Utc>,
    pub uptime_human: String,
    pub uptime_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskAlert {
    pub available: String,
    pub mount: String,
    pub percent: u32,
    pub size: String,
    pub used: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadAverage {
    #[serde(rename = "15m")]
    pub fifteen: f64,
    #[serde(rename = "1m")]
    pub one: f64,
    #[serde(rename = "5m")]
    pub five: f64,
}

impl HealthReport {
    pub fn needs_attention(&self) -> bool {
        !self.disk_alerts.is_empty() || !self.failed_services.is_empty()
    }

    pub fn exit_code(&self) -> u8 {
        if self.needs_attention() {
            EXIT_ATTENTION
        } else {
            EXIT_HEALTHY
        }
    }
}

pub fn format_uptime(seconds: u64) -> String {
    let minutes = seconds / 60;
    let (hours, minutes) = (minutes / 60, minutes % 60);
    let (days, hours) = (hours / 24, hours % 24);
    format!("{days}d {hours}h {minutes}m")
}

#[cfg(test)]
pub(crate) fn sample_report() -> HealthReport {
    HealthReport {
        disk_alerts: vec![],
        failed_services: vec![],
        hostname: "web-01".to_string(),
        load_average: LoadAverage {
            one: 0.5,
            five: 0.25,
            fifteen: 0.1,
        },
        platform: "Linux 6.1.0 (Debian 12) x86_64".to_string(),
        runtime_version: "hostcheck 0.1.0".to_string(),
        timestamp: DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc),
        uptime_human: format_uptime(90061),
        uptime_seconds: 90061,
    }
}
