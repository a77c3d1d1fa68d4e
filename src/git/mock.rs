use crate::config::CiIdentity;
use crate::error::{Result, TrackBumpError};
use crate::git::Repository;
use std::sync::Mutex;

/// Mock repository for testing without actual git operations.
///
/// Read-side state is set up through the builder methods; write-side calls
/// are recorded and can be asserted on afterwards.
pub struct MockRepository {
    tags: Vec<String>,
    branch: String,
    last_message: Option<String>,
    fail_fetch: bool,
    fetches: Mutex<Vec<bool>>,
    commits: Mutex<Vec<String>>,
    created_tags: Mutex<Vec<String>>,
    identities: Mutex<Vec<(CiIdentity, bool)>>,
}

impl MockRepository {
    /// Create an empty mock repository on branch "main"
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            branch: "main".to_string(),
            last_message: None,
            fail_fetch: false,
            fetches: Mutex::new(Vec::new()),
            commits: Mutex::new(Vec::new()),
            created_tags: Mutex::new(Vec::new()),
            identities: Mutex::new(Vec::new()),
        }
    }

    /// Set the checked out branch
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    /// Set the existing tag list
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set the HEAD commit message
    pub fn with_last_message(mut self, message: impl Into<String>) -> Self {
        self.last_message = Some(message.into());
        self
    }

    /// Make fetch_tags fail with a remote error
    pub fn failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    /// Recorded fetch calls (force flag per call)
    pub fn fetches(&self) -> Vec<bool> {
        self.fetches.lock().unwrap().clone()
    }

    /// Recorded commit messages
    pub fn commits(&self) -> Vec<String> {
        self.commits.lock().unwrap().clone()
    }

    /// Recorded created tag names
    pub fn created_tags(&self) -> Vec<String> {
        self.created_tags.lock().unwrap().clone()
    }

    /// Recorded identity setups
    pub fn identities(&self) -> Vec<(CiIdentity, bool)> {
        self.identities.lock().unwrap().clone()
    }

    /// True when no write-side call was made
    pub fn is_unmutated(&self) -> bool {
        self.commits().is_empty() && self.created_tags().is_empty() && self.identities().is_empty()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn fetch_tags(&self, force: bool) -> Result<()> {
        if self.fail_fetch {
            return Err(TrackBumpError::remote("Fetch failed: mock".to_string()));
        }
        self.fetches.lock().unwrap().push(force);
        Ok(())
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }

    fn current_branch(&self) -> Result<String> {
        Ok(self.branch.clone())
    }

    fn last_commit_message(&self) -> Result<Option<String>> {
        Ok(self.last_message.clone())
    }

    fn set_identity(&self, identity: &CiIdentity, sign_commits: bool) -> Result<()> {
        self.identities
            .lock()
            .unwrap()
            .push((identity.clone(), sign_commits));
        Ok(())
    }

    fn commit_all(&self, message: &str) -> Result<()> {
        self.commits.lock().unwrap().push(message.to_string());
        Ok(())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.created_tags.lock().unwrap().push(name.to_string());
        Ok(())
    }
}
