//! Folds libgit2 status and stash enumeration into snapshot counters.

use git2::{Repository, Status, StatusOptions};
use log::debug;

use crate::error::{GitContext, StateError};
use crate::snapshot::{Change, RepoSnapshot};

/// Untracked directories show up as one entry, submodules not at all.
/// Index-to-workdir renames are left off: git itself reports those as a
/// delete plus an add.
pub fn status_options() -> StatusOptions {
    let mut opts = StatusOptions::new();
    opts.include_untracked(true)
        .exclude_submodules(true)
        .renames_from_rewrites(true)
        .renames_head_to_index(true);
    opts
}

fn side_change(status: Status, new: Status, modified: Status, deleted: Status) -> Option<Change> {
    if status.intersects(new) {
        Some(Change::Added)
    } else if status.intersects(modified) {
        Some(Change::Modified)
    } else if status.intersects(deleted) {
        Some(Change::Deleted)
    } else {
        None
    }
}

/// Staged change for a path. New wins over modified, modified over deleted.
pub fn index_change(status: Status) -> Option<Change> {
    side_change(
        status,
        Status::INDEX_NEW,
        Status::INDEX_MODIFIED | Status::INDEX_TYPECHANGE | Status::INDEX_RENAMED,
        Status::INDEX_DELETED,
    )
}

/// Unstaged change for a path, same precedence as [`index_change`].
pub fn worktree_change(status: Status) -> Option<Change> {
    side_change(
        status,
        Status::WT_NEW,
        Status::WT_MODIFIED | Status::WT_TYPECHANGE | Status::WT_RENAMED,
        Status::WT_DELETED,
    )
}

/// Counts one status entry. Conflicts are counted on top of any change bucket.
pub fn classify(status: Status, snapshot: &mut RepoSnapshot) {
    if let Some(change) = index_change(status) {
        snapshot.staged.record(change);
    }
    if let Some(change) = worktree_change(status) {
        snapshot.unstaged.record(change);
    }
    if status.contains(Status::CONFLICTED) {
        snapshot.conflicted += 1;
    }
}

pub fn count_stashes(repo: &mut Repository) -> Result<usize, StateError> {
    let mut stashes = 0;
    repo.stash_foreach(|_, _, _| {
        stashes += 1;
        true
    })
    .git_context("stash_foreach")?;
    Ok(stashes)
}

/// Fills the change, conflict and stash counters of `snapshot`.
pub fn aggregate(repo: &mut Repository, snapshot: &mut RepoSnapshot) -> Result<(), StateError> {
    snapshot.stashes = count_stashes(repo)?;

    // Bare repositories have no working tree to compare against.
    if repo.is_bare() {
        debug!("bare repository, skipping status");
        return Ok(());
    }

    let mut opts = status_options();
    let statuses = repo.statuses(Some(&mut opts)).git_context("status_foreach")?;
    for entry in statuses.iter() {
        classify(entry.status(), snapshot);
    }
    debug!(
        "{} status entries: staged {:?}, unstaged {:?}, conflicted {}, stashes {}",
        statuses.len(),
        snapshot.staged,
        snapshot.unstaged,
        snapshot.conflicted,
        snapshot.stashes
    );
    Ok(())
}
