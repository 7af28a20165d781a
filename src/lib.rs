//! Reduces a git working directory to the handful of numbers a shell prompt
//! needs: branch, upstream divergence, staged/unstaged changes, conflicts and
//! stashes.

use std::path::Path;

pub mod aggregate;
pub mod error;
pub mod resolver;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::StateError;
pub use snapshot::{BranchIdentity, Change, Divergence, FileTriplet, RepoSnapshot};

/// Computes a fresh snapshot of the repository enclosing `path`.
///
/// Returns [`StateError::NotARepository`] when no repository is found at or
/// above `path`. Any other error means the repository could not be read and
/// should be treated as fatal.
pub fn compute_repo_state(path: impl AsRef<Path>) -> Result<RepoSnapshot, StateError> {
    let mut repo = resolver::discover(path.as_ref())?;
    let resolver::Resolution { branch, upstream } = resolver::resolve(&repo)?;
    let mut snapshot = RepoSnapshot::new(branch, upstream);
    aggregate::aggregate(&mut repo, &mut snapshot)?;
    Ok(snapshot)
}
