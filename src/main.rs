mod collectors;
mod config;
mod persist;
mod render;
mod state;

use clap::Parser;
use collectors::Collector;
use config::{Cli, ReportConfig};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

const EXIT_FATAL: u8 = 1;

fn main() -> ExitCode {
    init_tracing();

    // clap exits with 2 on usage errors, which would read as "alerts found".
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(EXIT_FATAL)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let cfg = match cli.into_config() {
        Ok(cfg) => cfg,
        Err(err) => {
            error!(error = %err, "invalid arguments");
            return ExitCode::from(EXIT_FATAL);
        }
    };

    let code = run(&cfg, &Collector::default(), &mut io::stdout().lock());
    ExitCode::from(code)
}

fn run(cfg: &ReportConfig, collector: &Collector, out: &mut impl Write) -> u8 {
    let report = collector.collect(cfg.max_disk_percent);

    let rendered = match render::render(&report, cfg.format) {
        Ok(text) => text,
        Err(err) => {
            error!(error = %err, "failed to render report");
            return EXIT_FATAL;
        }
    };
    if let Err(err) = out.write_all(rendered.as_bytes()).and_then(|_| out.flush()) {
        error!(error = %err, "failed to write report to stdout");
        return EXIT_FATAL;
    }

    if let Some(path) = &cfg.write_report {
        if let Err(err) = persist::persist(&report, path, cfg.format) {
            error!(error = %err, "failed to persist report");
            return EXIT_FATAL;
        }
    }

    report.exit_code()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}
