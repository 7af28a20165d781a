//! Works out what HEAD points at and how the current branch relates to its
//! upstream.
//!
//! HEAD lands in exactly one of four states: missing, unborn, on a branch, or
//! detached. Only the branch state goes on to look for an upstream.

use git2::{Branch, ErrorCode, Oid, Reference, Repository};
use log::debug;
use std::fs;
use std::path::Path;

use crate::error::{GitContext, StateError};
use crate::snapshot::{BranchIdentity, Divergence};

/// Branch names longer than this are cut to keep the prompt narrow.
pub const MAX_CHARS_IN_REF_SHORTHAND: usize = 32;

/// Hex digits kept from a detached commit id.
pub const SHORT_ID_LEN: usize = 7;

const BRANCH_REF_PREFIX: &str = "refs/heads/";
const HEAD_FILE_PREFIX: &str = "ref: refs/heads/";

/// Identity of the current checkout plus its upstream divergence, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub branch: BranchIdentity,
    pub upstream: Option<Divergence>,
}

/// Finds the repository enclosing `path`, walking up through parents.
pub fn discover(path: &Path) -> Result<Repository, StateError> {
    match Repository::discover(path) {
        Ok(repo) => {
            debug!("discovered repository at {}", repo.path().display());
            Ok(repo)
        }
        Err(e) if e.code() == ErrorCode::NotFound => {
            debug!("no repository above {}: {}", path.display(), e.message());
            Err(StateError::NotARepository(path.to_path_buf()))
        }
        Err(e) => Err(e).git_context("open_repo"),
    }
}

pub fn resolve(repo: &Repository) -> Result<Resolution, StateError> {
    let head = match repo.head() {
        Ok(head) => head,
        Err(e) if e.code() == ErrorCode::UnbornBranch => {
            let name = unborn_branch_name(repo)?;
            debug!("HEAD is unborn on {name}");
            return Ok(Resolution {
                branch: BranchIdentity::UnbornBranch(name),
                upstream: None,
            });
        }
        Err(e) if e.code() == ErrorCode::NotFound => {
            debug!("HEAD not found");
            return Ok(Resolution {
                branch: BranchIdentity::UnknownHead,
                upstream: None,
            });
        }
        Err(e) => return Err(e).git_context("read_head"),
    };

    if head.is_branch() {
        let name = truncate_shorthand(&String::from_utf8_lossy(head.shorthand_bytes()));
        let upstream = upstream_divergence(repo, head)?;
        debug!("HEAD is on branch {name}, upstream {upstream:?}");
        return Ok(Resolution {
            branch: BranchIdentity::NamedBranch(name),
            upstream,
        });
    }

    let oid = repo.refname_to_id("HEAD").git_context("head_id")?;
    let short = short_id(oid);
    debug!("HEAD is detached at {short}");
    Ok(Resolution {
        branch: BranchIdentity::DetachedHead(short),
        upstream: None,
    })
}

fn truncate_shorthand(name: &str) -> String {
    name.chars().take(MAX_CHARS_IN_REF_SHORTHAND).collect()
}

fn short_id(oid: Oid) -> String {
    let mut hex = oid.to_string();
    hex.truncate(SHORT_ID_LEN);
    hex
}

/// Ahead/behind counts against the configured upstream, `None` when the
/// branch tracks nothing.
fn upstream_divergence(
    repo: &Repository,
    head: Reference<'_>,
) -> Result<Option<Divergence>, StateError> {
    let local = Branch::wrap(head);
    let upstream = match local.upstream() {
        Ok(upstream) => upstream,
        Err(e) if e.code() == ErrorCode::NotFound => return Ok(None),
        Err(e) => return Err(e).git_context("get_upstream"),
    };

    let local_oid = direct_target(local.get(), "resolve_local")?;
    let upstream_oid = direct_target(upstream.get(), "resolve_upstream")?;
    let (ahead, behind) = repo
        .graph_ahead_behind(local_oid, upstream_oid)
        .git_context("ahead_behind")?;
    Ok(Some(Divergence { ahead, behind }))
}

fn direct_target(reference: &Reference<'_>, context: &'static str) -> Result<Oid, StateError> {
    let resolved = reference.resolve().git_context(context)?;
    resolved
        .target()
        .ok_or_else(|| git2::Error::from_str("resolved reference has no target"))
        .git_context(context)
}

/// Name of the branch HEAD points at when that branch has no commits.
///
/// `repo.head()` cannot hand back a reference for a missing target, so read
/// the symbolic HEAD directly and fall back to the pointer file on disk.
fn unborn_branch_name(repo: &Repository) -> Result<String, StateError> {
    if let Ok(head) = repo.find_reference("HEAD") {
        let name = head
            .symbolic_target()
            .and_then(|target| target.strip_prefix(BRANCH_REF_PREFIX))
            .filter(|name| !name.is_empty());
        if let Some(name) = name {
            return Ok(name.to_string());
        }
    }
    read_head_file(&repo.path().join("HEAD"))
}

fn read_head_file(path: &Path) -> Result<String, StateError> {
    let content = fs::read_to_string(path).map_err(|source| StateError::UnbornHead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_head_file(&content).ok_or_else(|| StateError::MalformedHead(path.to_path_buf()))
}

fn parse_head_file(content: &str) -> Option<String> {
    content
        .strip_prefix(HEAD_FILE_PREFIX)?
        .split_whitespace()
        .next()
        .map(str::to_string)
}
