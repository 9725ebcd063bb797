//! Test utilities for creating temporary git repositories.

use git2::Repository;
use std::path::PathBuf;
use tempfile::TempDir;

use super::repo::open_repo_at;

/// A temporary git repository for testing.
pub struct TempRepo {
    pub dir: TempDir,
}

impl TempRepo {
    /// Create a new temporary git repository with one commit on `branch`.
    /// No remotes are configured.
    pub fn new(branch: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let repo = Repository::init(dir.path()).expect("init repo");

        // Create initial commit so HEAD exists
        {
            let sig = git2::Signature::now("Test", "test@example.com").unwrap();
            let tree_id = repo.index().unwrap().write_tree().unwrap();
            let tree = repo.find_tree(tree_id).unwrap();
            repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
                .expect("create initial commit");
        }

        // Rename default branch if needed
        {
            let head = repo.head().expect("get head");
            let current_branch = head.shorthand().unwrap_or("master").to_string();
            drop(head); // Release borrow before renaming
            if current_branch != branch {
                let mut branch_ref = repo
                    .find_branch(&current_branch, git2::BranchType::Local)
                    .expect("find branch");
                branch_ref.rename(branch, true).expect("rename branch");
            }
        }

        Self { dir }
    }

    /// Add a remote with the given fetch URL.
    pub fn add_remote(&self, name: &str, url: &str) {
        self.open().remote(name, url).expect("add remote");
    }

    /// Configure `branch` to track `remote/merge`.
    pub fn set_upstream(&self, branch: &str, remote: &str, merge: &str) {
        let mut config = self.open().config().expect("repo config");
        config
            .set_str(&format!("branch.{branch}.remote"), remote)
            .expect("set branch remote");
        let merge_ref = format!("refs/heads/{merge}");
        config
            .set_str(&format!("branch.{branch}.merge"), &merge_ref)
            .expect("set branch merge");
    }

    /// Get the path to the repository.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Open the repository.
    pub fn open(&self) -> Repository {
        open_repo_at(self.dir.path()).expect("open temp repo")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::git::current_branch;

    #[test]
    fn test_temp_repo_creates_valid_repo() {
        let temp = TempRepo::new("main");
        temp.add_remote("origin", "https://github.com/test-owner/test-repo.git");
        let repo = temp.open();

        assert_eq!(current_branch(&repo).unwrap(), "main");
        assert_eq!(
            repo.find_remote("origin").unwrap().url(),
            Some("https://github.com/test-owner/test-repo.git")
        );
    }
}
