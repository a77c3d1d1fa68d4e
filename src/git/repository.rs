use crate::config::CiIdentity;
use crate::error::{Result, TrackBumpError};
use crate::git::Repository;
use git2::Repository as Git2Repo;
use std::path::Path;

/// Wrapper around git2::Repository implementing our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        Ok(Git2Repository { repo })
    }
}

impl Repository for Git2Repository {
    fn fetch_tags(&self, force: bool) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote("origin")
            .map_err(|e| TrackBumpError::remote(format!("Cannot find remote 'origin': {}", e)))?;

        let refspec = if force {
            "+refs/tags/*:refs/tags/*"
        } else {
            "refs/tags/*:refs/tags/*"
        };

        let mut options = git2::FetchOptions::new();
        options.download_tags(git2::AutotagOption::All);

        remote
            .fetch(&[refspec], Some(&mut options), None)
            .map_err(|e| TrackBumpError::remote(format!("Fetch failed: {}", e)))?;

        Ok(())
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;
        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;
        head.shorthand()
            .map(|s| s.to_string())
            .ok_or_else(|| TrackBumpError::config("HEAD is not on a named branch".to_string()))
    }

    fn last_commit_message(&self) -> Result<Option<String>> {
        match self.repo.head() {
            Ok(head) => {
                let commit = head.peel_to_commit()?;
                let message = commit
                    .message()
                    .map(|m| m.trim().to_string())
                    .filter(|m| !m.is_empty());
                Ok(message)
            }
            Err(e)
                if e.code() == git2::ErrorCode::UnbornBranch
                    || e.code() == git2::ErrorCode::NotFound =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn set_identity(&self, identity: &CiIdentity, sign_commits: bool) -> Result<()> {
        let mut config = self.repo.config()?;
        config.set_str("user.name", &identity.user)?;
        config.set_str("user.email", &identity.email)?;
        if sign_commits {
            config.set_bool("commit.gpgsign", true)?;
        }
        Ok(())
    }

    fn commit_all(&self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        index.add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)?;
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;
        let signature = self.repo.signature()?;
        let parent = self.repo.head()?.peel_to_commit()?;

        self.repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &[&parent])?;

        Ok(())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let target = self
            .repo
            .head()?
            .peel(git2::ObjectType::Commit)
            .map_err(|e| TrackBumpError::tag(format!("Cannot resolve HEAD: {}", e)))?;

        self.repo
            .tag_lightweight(name, &target, false)
            .map_err(|e| TrackBumpError::tag(format!("Cannot create tag '{}': {}", name, e)))?;

        Ok(())
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send. libgit2 is
// thread-safe for the read operations we perform concurrently.
unsafe impl Sync for Git2Repository {}
