use serde::Serialize;
use std::fmt;

/// Marker rendered in front of an abbreviated commit id.
pub const DETACHED_MARKER: char = ':';

/// Label shown when HEAD cannot be found at all.
pub const HEAD_NOT_FOUND: &str = ":head_not_found";

/// Counts of changed paths on one side (index or working tree).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileTriplet {
    pub added: usize,
    pub modified: usize,
    pub deleted: usize,
}

impl FileTriplet {
    pub fn new(added: usize, modified: usize, deleted: usize) -> Self {
        Self { added, modified, deleted }
    }

    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.modified == 0 && self.deleted == 0
    }

    pub fn record(&mut self, change: Change) {
        match change {
            Change::Added => self.added += 1,
            Change::Modified => self.modified += 1,
            Change::Deleted => self.deleted += 1,
        }
    }
}

/// Bucket a path falls into on one side (index or working tree).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Added,
    Modified,
    Deleted,
}

/// What HEAD currently points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum BranchIdentity {
    /// A branch with history, short name truncated for display.
    NamedBranch(String),
    /// A branch that HEAD points at but that has no commits yet.
    UnbornBranch(String),
    /// HEAD points directly at a commit; holds the abbreviated id.
    DetachedHead(String),
    /// HEAD reference is missing.
    UnknownHead,
}

impl BranchIdentity {
    pub fn is_detached(&self) -> bool {
        matches!(self, BranchIdentity::DetachedHead(_))
    }
}

impl fmt::Display for BranchIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchIdentity::NamedBranch(name) | BranchIdentity::UnbornBranch(name) => {
                f.write_str(name)
            }
            BranchIdentity::DetachedHead(hash) => write!(f, "{DETACHED_MARKER}{hash}"),
            BranchIdentity::UnknownHead => f.write_str(HEAD_NOT_FOUND),
        }
    }
}

/// Commits on the local branch and its upstream that the other side lacks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Divergence {
    pub ahead: usize,
    pub behind: usize,
}

impl Divergence {
    pub fn is_even(&self) -> bool {
        self.ahead == 0 && self.behind == 0
    }
}

/// Point-in-time summary of a working directory, built fresh per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoSnapshot {
    pub staged: FileTriplet,
    pub unstaged: FileTriplet,
    pub conflicted: usize,
    pub stashes: usize,
    pub branch: BranchIdentity,
    /// Only ever set for [`BranchIdentity::NamedBranch`] with a configured upstream.
    pub upstream: Option<Divergence>,
}

impl RepoSnapshot {
    pub fn new(branch: BranchIdentity, upstream: Option<Divergence>) -> Self {
        Self {
            staged: FileTriplet::default(),
            unstaged: FileTriplet::default(),
            conflicted: 0,
            stashes: 0,
            branch,
            upstream,
        }
    }

    /// Plain field dump for debugging. Not a stable format.
    pub fn dump(&self) -> String {
        let upstream = match self.upstream {
            Some(d) => format!("ahead={} behind={}", d.ahead, d.behind),
            None => "none".to_string(),
        };
        format!(
            "unstaged={{+{} ~{} -{}}}\n\
             staged={{+{} ~{} -{}}}\n\
             conflicted={}\n\
             stashes={}\n\
             branchname={}\n\
             is_hash={}\n\
             upstream={}\n",
            self.unstaged.added,
            self.unstaged.modified,
            self.unstaged.deleted,
            self.staged.added,
            self.staged.modified,
            self.staged.deleted,
            self.conflicted,
            self.stashes,
            self.branch,
            u8::from(self.branch.is_detached()),
            upstream,
        )
    }
}
