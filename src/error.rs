use std::io;
use std::path::PathBuf;

/// Errors surfaced by [`crate::compute_repo_state`].
///
/// Only [`StateError::NotARepository`] is expected during normal use. Every
/// other variant means the backend or the repository is in a state we cannot
/// reason about, and callers are expected to treat it as fatal.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("not a git repository (or any parent): {}", .0.display())]
    NotARepository(PathBuf),
    #[error("Error ({context}) {}/{:?}: {}", .source.raw_code(), .source.class(), .source.message())]
    Git {
        context: &'static str,
        #[source]
        source: git2::Error,
    },
    #[error("cannot read name of unborn branch from {}: {source}", .path.display())]
    UnbornHead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read name of unborn branch: malformed {}", .0.display())]
    MalformedHead(PathBuf),
}

impl StateError {
    pub fn is_not_a_repository(&self) -> bool {
        matches!(self, StateError::NotARepository(_))
    }

    /// Process exit status for a fatal error.
    pub fn exit_code(&self) -> i32 {
        match self {
            StateError::NotARepository(_) => 0,
            StateError::Git { source, .. } => match source.raw_code() {
                0 => 1,
                code => code.abs(),
            },
            StateError::UnbornHead { .. } | StateError::MalformedHead(_) => 1,
        }
    }
}

/// Attaches a context label to backend errors.
pub(crate) trait GitContext<T> {
    fn git_context(self, context: &'static str) -> Result<T, StateError>;
}

impl<T> GitContext<T> for Result<T, git2::Error> {
    fn git_context(self, context: &'static str) -> Result<T, StateError> {
        self.map_err(|source| StateError::Git { context, source })
    }
}
