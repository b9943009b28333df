use crate::render::Format;
use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_MAX_DISK_PERCENT: u32 = 80;

/// Collects a host health report (uptime, load average, disk usage and failed
/// services) and prints it to stdout. Exits with 2 when anything needs
/// attention.
#[derive(Parser, Debug)]
#[command(name = "hostcheck")]
#[command(version)]
pub struct Cli {
    /// Alert when a mount's utilisation is at or above this percentage.
    #[arg(long, default_value_t = DEFAULT_MAX_DISK_PERCENT)]
    pub max_disk_percent: u32,
    /// Output format for stdout.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,
    /// Also write the report to this path, in the same format.
    #[arg(long)]
    pub write_report: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub max_disk_percent: u32,
    pub format: Format,
    pub write_report: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("--max-disk-percent must be between 0 and 100, got {0}")]
    ThresholdOutOfRange(u32),
    #[error("--write-report must not be empty")]
    EmptyReportPath,
}

impl Cli {
    pub fn into_config(self) -> Result<ReportConfig, ConfigError> {
        if self.max_disk_percent > 100 {
            return Err(ConfigError::ThresholdOutOfRange(self.max_disk_percent));
        }
        if matches!(&self.write_report, Some(p) if p.as_os_str().is_empty()) {
            return Err(ConfigError::EmptyReportPath);
        }

        Ok(ReportConfig {
            max_disk_percent: self.max_disk_percent,
            format: self.format,
            write_report: self.write_report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("hostcheck").chain(args.iter().copied()))
            .expect("valid flags")
    }

    #[test]
    fn defaults() {
        let cfg = parse(&[]).into_config().expect("valid config");
        assert_eq!(cfg.max_disk_percent, 80);
        assert_eq!(cfg.format, Format::Json);
        assert!(cfg.write_report.is_none());
    }

    #[test]
    fn all_flags() {
        let cfg = parse(&[
            "--max-disk-percent",
            "90",
            "--format",
            "text",
            "--write-report",
            "/var/tmp/health/report.txt",
        ])
        .into_config()
        .expect("valid config");
        assert_eq!(cfg.max_disk_percent, 90);
        assert_eq!(cfg.format, Format::Text);
        assert_eq!(cfg.write_report, Some(PathBuf::from("/var/tmp/health/report.txt")));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["hostcheck", "--format", "yaml"]).is_err());
    }

    #[test]
    fn threshold_above_hundred_is_rejected() {
        let err = parse(&["--max-disk-percent", "101"]).into_config().unwrap_err();
        assert!(matches!(err, ConfigError::ThresholdOutOfRange(101)));
    }

    #[test]
    fn empty_report_path_is_rejected() {
        assert!(Cli::try_parse_from(["hostcheck", "--write-report", ""]).is_err());

        let cli = Cli {
            max_disk_percent: 80,
            format: Format::Text,
            write_report: Some(PathBuf::new()),
        };
        assert!(matches!(cli.into_config(), Err(ConfigError::EmptyReportPath)));
    }
}
