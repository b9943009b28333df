use crate::render::{self, Format, RenderError};
use crate::state::HealthReport;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to create report directory {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to write report {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Render(#[from] RenderError),
}

pub fn persist(
    report: &HealthReport,
    path: impl AsRef<Path>,
    format: Format,
) -> Result<(), PersistError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| PersistError::CreateDir {
            path: parent.display().to_string(),
            source,
        })?;
    }

    let body = render::render(report, format)?;
    fs::write(path, body).map_err(|source| PersistError::Write {
        path: path.display().to_string(),
        source,
    })?;

    info!(path = %path.display(), ?format, "report written");
    Ok(())
}
