//! Throwaway repositories for tests, built through libgit2 so no `git`
//! binary is needed.

use git2::{Commit, Oid, Repository, RepositoryInitOptions, Signature};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub(crate) struct TestRepo {
    pub repo: Repository,
    pub dir: TempDir,
}

impl TestRepo {
    /// Empty repository whose HEAD points at an unborn `main`.
    pub fn init() -> Self {
        let dir = TempDir::new().unwrap();
        let mut opts = RepositoryInitOptions::new();
        opts.initial_head("main");
        let repo = Repository::init_opts(dir.path(), &opts).unwrap();
        Self { repo, dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn signature() -> Signature<'static> {
        Signature::now("Prompt Tester", "tester@example.com").unwrap()
    }

    pub fn write(&self, name: &str, content: &str) {
        fs::write(self.path().join(name), content).unwrap();
    }

    pub fn remove(&self, name: &str) {
        fs::remove_file(self.path().join(name)).unwrap();
    }

    /// `git add` for each path.
    pub fn stage(&self, names: &[&str]) {
        let mut index = self.repo.index().unwrap();
        for name in names {
            index.add_path(Path::new(name)).unwrap();
        }
        index.write().unwrap();
    }

    /// `git rm`: drop from the index and the working tree.
    pub fn stage_removal(&self, name: &str) {
        let mut index = self.repo.index().unwrap();
        index.remove_path(Path::new(name)).unwrap();
        index.write().unwrap();
        self.remove(name);
    }

    /// Commits the current index on top of HEAD.
    pub fn commit(&self, message: &str) -> Oid {
        let mut index = self.repo.index().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let parent = self.repo.head().ok().map(|h| h.peel_to_commit().unwrap());
        let parents: Vec<&Commit> = parent.iter().collect();
        let sig = Self::signature();
        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    /// Commits a single-file change onto `refname` without touching the
    /// working tree or index.
    pub fn commit_on(&self, refname: &str, parent: Oid, name: &str, content: &str) -> Oid {
        let parent = self.repo.find_commit(parent).unwrap();
        let blob = self.repo.blob(content.as_bytes()).unwrap();
        let mut builder = self.repo.treebuilder(Some(&parent.tree().unwrap())).unwrap();
        builder.insert(name, blob, 0o100644).unwrap();
        let tree = self.repo.find_tree(builder.write().unwrap()).unwrap();
        let sig = Self::signature();
        self.repo
            .commit(Some(refname), &sig, &sig, &format!("Add {name}"), &tree, &[&parent])
            .unwrap()
    }

    /// `git checkout -b <name>` from the current commit.
    pub fn checkout_new_branch(&self, name: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo.branch(name, &head, false).unwrap();
        self.repo.set_head(&format!("refs/heads/{name}")).unwrap();
    }
}
