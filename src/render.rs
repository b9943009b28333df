use crate::state::HealthReport;
use clap::ValueEnum;
use std::fmt::Write;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Text,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn render(report: &HealthReport, format: Format) -> Result<String, RenderError> {
    match format {
        Format::Json => render_json(report),
        Format::Text => Ok(render_text(report)),
    }
}

pub fn render_json(report: &HealthReport) -> Result<String, RenderError> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}

pub fn render_text(report: &HealthReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Health report generated at {} UTC",
        report.timestamp.format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(out, "Hostname: {}", report.hostname);
    let _ = writeln!(out, "Platform: {}", report.platform);
    let _ = writeln!(out, "Runtime version: {}", report.runtime_version);
    let _ = writeln!(
        out,
        "Uptime: {} ({}s)",
        report.uptime_human, report.uptime_seconds
    );
    let load = &report.load_average;
    let _ = writeln!(
        out,
        "Load average (1m/5m/15m): {:.2} / {:.2} / {:.2}",
        load.one, load.five, load.fifteen
    );

    out.push('\n');
    if report.disk_alerts.is_empty() {
        out.push_str("Disk usage is within threshold.\n");
    } else {
        out.push_str("Disks above threshold:\n");
        for alert in &report.disk_alerts {
            let _ = writeln!(
                out,
                "- {}: {}% used ({} / {})",
                alert.mount, alert.percent, alert.used, alert.size
            );
        }
    }

    out.push('\n');
    if report.failed_services.is_empty() {
        out.push_str("No failed systemd units detected.\n");
    } else {
        out.push_str("Failed systemd units:\n");
        for unit in &report.failed_services {
            let _ = writeln!(out, "- {unit}");
        }
    }

    out
}
