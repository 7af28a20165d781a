use promptsynth::{compute_repo_state, RepoSnapshot, StateError};
use std::path::Path;

use crate::config::PromptOptions;
use crate::render::render;

/// Expand tilde in path
fn expand_tilde(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}

/// Snapshot of the repository at `dir`, `None` when `dir` is not inside one.
pub fn snapshot(dir: &str) -> Result<Option<RepoSnapshot>, StateError> {
    let dir = expand_tilde(dir);
    match compute_repo_state(Path::new(&dir)) {
        Ok(snapshot) => Ok(Some(snapshot)),
        Err(e) if e.is_not_a_repository() => {
            log::debug!("{e}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

pub fn prompt(dir: &str, options: &PromptOptions) -> Result<Option<String>, StateError> {
    Ok(snapshot(dir)?.map(|s| render(&s, options)))
}

pub fn debug(dir: &str) -> Result<Option<String>, StateError> {
    Ok(snapshot(dir)?.map(|s| s.dump()))
}
