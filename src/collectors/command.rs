use std::fmt;
use std::io::ErrorKind;
use std::process::Command;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Captured(String),
    Degraded(Degradation),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Degradation {
    EmptyArgv,
    NotFound,
    Spawn(String),
    Failed { code: Option<i32> },
}

impl fmt::Display for Degradation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degradation::EmptyArgv => write!(f, "no program given"),
            Degradation::NotFound => write!(f, "program not found"),
            Degradation::Spawn(err) => write!(f, "spawn failed: {err}"),
            Degradation::Failed { code: Some(code) } => write!(f, "exited with status {code}"),
            Degradation::Failed { code: None } => write!(f, "terminated by signal"),
        }
    }
}

impl CommandOutput {
    pub fn text(&self) -> &str {
        match self {
            CommandOutput::Captured(text) => text,
            CommandOutput::Degraded(_) => "",
        }
    }

    pub fn degradation(&self) -> Option<&Degradation> {
        match self {
            CommandOutput::Captured(_) => None,
            CommandOutput::Degraded(reason) => Some(reason),
        }
    }
}

pub fn run(argv: &[&str]) -> CommandOutput {
    let Some((program, args)) = argv.split_first() else {
        return CommandOutput::Degraded(Degradation::EmptyArgv);
    };

    let output = match Command::new(program).args(args).output() {
        Ok(output) => output,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(program = %program, "command not found");
            return CommandOutput::Degraded(Degradation::NotFound);
        }
        Err(err) => {
            debug!(program = %program, error = %err, "failed to spawn command");
            return CommandOutput::Degraded(Degradation::Spawn(err.to_string()));
        }
    };

    if !output.status.success() {
        debug!(program = %program, status = ?output.status.code(), "command exited non-zero");
        return CommandOutput::Degraded(Degradation::Failed {
            code: output.status.code(),
        });
    }

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    CommandOutput::Captured(text)
}

pub fn command_exists(program: &str) -> bool {
    which::which(program).is_ok()
}
