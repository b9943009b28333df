use crate::collectors::command;
use tracing::debug;

const SERVICE_MANAGER: &str = "systemctl";

// Status glyphs systemd prints in front of failed units on some versions.
const STATUS_MARKERS: [&str; 3] = ["●", "*", "×"];

#[derive(Debug, Clone)]
pub struct ServiceScanner {
    pub program: String,
}

impl Default for ServiceScanner {
    fn default() -> Self {
        Self {
            program: SERVICE_MANAGER.to_string(),
        }
    }
}

impl ServiceScanner {
    pub fn failed_services(&self) -> Vec<String> {
        if !command::command_exists(&self.program) {
            debug!(program = %self.program, "service manager not installed, skipping");
            return Vec::new();
        }
        let output = command::run(&[self.program.as_str(), "--failed", "--no-legend"]);
        if let Some(reason) = output.degradation() {
            debug!(program = %self.program, %reason, "failed-unit query unavailable");
        }
        parse_failed_units(output.text())
    }
}

pub fn parse_failed_units(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| {
            line.split_whitespace()
                .find(|token| !STATUS_MARKERS.contains(token))
                .map(str::to_string)
        })
        .collect()
}
