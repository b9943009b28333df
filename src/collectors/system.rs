use crate::state::LoadAverage;
use std::env::consts::ARCH;
use sysinfo::{System, SystemExt};

const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone)]
pub struct HostIdentity {
    pub hostname: String,
    pub platform: String,
}

pub fn host_identity(system: &System) -> HostIdentity {
    let hostname = system.host_name().unwrap_or_else(|| UNKNOWN.to_string());
    let os = system
        .long_os_version()
        .or_else(|| system.name())
        .unwrap_or_else(|| UNKNOWN.to_string());
    let platform = match system.kernel_version() {
        Some(kernel) => format!("{os} (kernel {kernel}) {ARCH}"),
        None => format!("{os} {ARCH}"),
    };
    HostIdentity { hostname, platform }
}

pub fn load_average(system: &System) -> LoadAverage {
    let load = system.load_average();
    LoadAverage {
        fifteen: sanitize(load.fifteen),
        one: sanitize(load.one),
        five: sanitize(load.five),
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_average_is_never_negative() {
        let system = System::new();
        let load = load_average(&system);
        assert!(load.one >= 0.0 && load.five >= 0.0 && load.fifteen >= 0.0);
    }

    #[test]
    fn identity_is_never_empty() {
        let system = System::new();
        let identity = host_identity(&system);
        assert!(!identity.hostname.is_empty());
        assert!(identity.platform.ends_with(ARCH));
    }

    #[test]
    fn sanitize_clamps_bad_values() {
        assert_eq!(sanitize(f64::NAN), 0.0);
        assert_eq!(sanitize(-1.0), 0.0);
        assert_eq!(sanitize(1.5), 1.5);
    }
}
