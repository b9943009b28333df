use crate::collectors::command;
use crate::state::DiskAlert;
use tracing::debug;

const USAGE_LISTING: [&str; 2] = ["df", "-hP"];

#[derive(Debug, Clone)]
pub struct DiskScanner {
    pub argv: Vec<String>,
}

impl Default for DiskScanner {
    fn default() -> Self {
        Self {
            argv: USAGE_LISTING.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl DiskScanner {
    pub fn disk_alerts(&self, threshold_percent: u32) -> Vec<DiskAlert> {
        let argv: Vec<&str> = self.argv.iter().map(String::as_str).collect();
        let output = command::run(&argv);
        if let Some(reason) = output.degradation() {
            debug!(%reason, "disk usage listing unavailable");
        }
        parse_df(output.text(), threshold_percent)
    }
}

// Rows with fewer than six fields are wrapped device names; skip them.
pub fn parse_df(output: &str, threshold_percent: u32) -> Vec<DiskAlert> {
    output
        .lines()
        .filter(|line| !line.is_empty())
        .skip(1)
        .filter_map(|line| {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 6 {
                return None;
            }

            let percent = match parts[4].trim_end_matches('%').parse::<u32>() {
                Ok(v) => v,
                Err(_) => {
                    debug!(mount = %parts[5], field = %parts[4], "skipping row without use percentage");
                    return None;
                }
            };
            if percent < threshold_percent {
                return None;
            }

            Some(DiskAlert {
                available: parts[3].to_string(),
                mount: parts[5].to_string(),
                percent,
                size: parts[1].to_string(),
                used: parts[2].to_string(),
            })
        })
        .collect()
}
