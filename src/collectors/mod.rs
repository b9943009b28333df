pub mod command;
pub mod disk;
pub mod services;
pub mod system;
pub mod uptime;

use crate::state::{format_uptime, HealthReport};
use chrono::Utc;
use disk::DiskScanner;
use services::ServiceScanner;
use sysinfo::{System, SystemExt};
use tracing::info;
use uptime::UptimeReader;

pub const RUNTIME_VERSION: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Default)]
pub struct Collector {
    pub uptime: UptimeReader,
    pub disks: DiskScanner,
    pub services: ServiceScanner,
}

impl Collector {
    pub fn collect(&self, threshold_percent: u32) -> HealthReport {
        let system = System::new();
        let identity = system::host_identity(&system);
        let load_average = system::load_average(&system);
        let uptime_seconds = self.uptime.uptime_seconds();
        let disk_alerts = self.disks.disk_alerts(threshold_percent);
        let failed_services = self.services.failed_services();

        info!(
            hostname = %identity.hostname,
            uptime_seconds,
            disk_alerts = disk_alerts.len(),
            failed_services = failed_services.len(),
            "collected health report"
        );

        HealthReport {
            disk_alerts,
            failed_services,
            hostname: identity.hostname,
            load_average,
            platform: identity.platform,
            runtime_version: RUNTIME_VERSION.to_string(),
            timestamp: Utc::now(),
            uptime_human: format_uptime(uptime_seconds),
            uptime_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn collect_assembles_report_from_probes() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "90061.50 1.00").expect("write uptime");
        let collector = Collector {
            uptime: UptimeReader {
                proc_path: file.path().to_path_buf(),
                ..UptimeReader::default()
            },
            disks: DiskScanner {
                argv: vec!["hostcheck-no-such-df".to_string()],
            },
            services: ServiceScanner {
                program: "hostcheck-no-such-systemctl".to_string(),
            },
        };

        let report = collector.collect(50);
        assert_eq!(report.uptime_seconds, 90061);
        assert_eq!(report.uptime_human, "1d 1h 1m");
        assert!(report.failed_services.is_empty());
        assert!(report.disk_alerts.is_empty());
        assert_eq!(report.runtime_version, RUNTIME_VERSION);
        assert!(!report.hostname.is_empty());
    }
}
