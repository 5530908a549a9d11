//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;

use git2::{Oid, Repository, Signature};

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        Self { dir, repo }
    }

    /// Path to the repository working directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Get the test signature for commits.
    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Write `filename` and return the resulting tree id.
    fn write_tree(&self, filename: &str, content: &str) -> Oid {
        let file_path = self.dir.path().join(filename);
        std::fs::write(&file_path, content).expect("Failed to write test file");

        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_path(Path::new(filename))
            .expect("Failed to add file");
        index.write().expect("Failed to write index");
        index.write_tree().expect("Failed to write tree")
    }

    /// Create a commit on HEAD with the given message. Returns the commit OID.
    pub fn commit(&self, message: &str) -> Oid {
        let sig = self.signature();

        let content = format!(
            "{}\n{}",
            message,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        );
        let tree_id = self.write_tree("test.txt", &content);
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Create a commit off the given parent without moving HEAD, simulating a
    /// side branch. Returns the commit OID.
    pub fn commit_off(&self, message: &str, parent: Oid, filename: &str) -> Oid {
        let sig = self.signature();

        let tree_id = self.write_tree(filename, message);
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");
        let parent_commit = self
            .repo
            .find_commit(parent)
            .expect("Failed to find parent commit");

        self.repo
            .commit(None, &sig, &sig, message, &tree, &[&parent_commit])
            .expect("Failed to create commit")
    }

    /// Create a merge commit on HEAD with the given parents (two for a true
    /// merge, three or more for an octopus merge). Returns the commit OID.
    pub fn merge(&self, message: &str, parents: &[Oid]) -> Oid {
        let sig = self.signature();

        let parent_commits: Vec<git2::Commit> = parents
            .iter()
            .map(|oid| {
                self.repo
                    .find_commit(*oid)
                    .expect("Failed to find parent commit")
            })
            .collect();
        let parent_refs: Vec<&git2::Commit> = parent_commits.iter().collect();

        let tree = parent_commits[0].tree().expect("Failed to get parent tree");

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
            .expect("Failed to create merge commit")
    }
}
