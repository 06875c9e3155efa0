use crate::config::Config;
use crate::error::AppError;
use crate::model::Task;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const STORE_FILE_NAME: &str = "todos.json";
const STORE_ENV_VAR: &str = "CLITO_STORE_PATH";

/// Resolves the document location: explicit path, then `CLITO_STORE_PATH`,
/// then the configured `store_path`, then `todos.json` in the working directory.
pub fn store_path(explicit: Option<&Path>, config: &Config) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Ok(path) = std::env::var(STORE_ENV_VAR)
        && !path.trim().is_empty()
    {
        return PathBuf::from(path);
    }

    match config.store_path.as_ref() {
        Some(path) => path.clone(),
        None => PathBuf::from(STORE_FILE_NAME),
    }
}

pub fn load_tasks(path: &Path) -> Result<Vec<Task>, AppError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|err| AppError::io(format!("{}: {}", path.display(), err)))?;
    serde_json::from_str(&content).map_err(|err| {
        AppError::invalid_data(format!("invalid JSON in {}: {}", path.display(), err))
    })
}

/// Unreadable or malformed documents load as an empty list.
pub fn load_tasks_or_default(path: &Path) -> Vec<Task> {
    match load_tasks(path) {
        Ok(tasks) => {
            debug!(path = %path.display(), count = tasks.len(), "loaded tasks");
            tasks
        }
        Err(err) => {
            debug!(path = %path.display(), error = %err, "discarding unreadable task store");
            Vec::new()
        }
    }
}

pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|err| AppError::io(format!("{}: {}", parent.display(), err)))?;
    }

    let content =
        serde_json::to_string_pretty(tasks).map_err(|err| AppError::invalid_data(err.to_string()))?;
    std::fs::write(path, content)
        .map_err(|err| AppError::io(format!("{}: {}", path.display(), err)))?;

    debug!(path = %path.display(), count = tasks.len(), "saved tasks");
    Ok(())
}
