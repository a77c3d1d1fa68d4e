//! Git operations abstraction layer.
//!
//! The [Repository] trait is the narrow capability interface the bump
//! workflow depends on: tag listing, branch and commit queries on the read
//! side, identity setup, commit, and tag creation on the write side.
//! [repository::Git2Repository] backs it with the `git2` crate;
//! [mock::MockRepository] is an in-memory implementation for tests.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::config::CiIdentity;
use crate::error::Result;

/// Common git operation trait for abstraction.
///
/// Implementors must be `Send + Sync`. All methods map underlying errors to
/// [crate::error::TrackBumpError] variants; nothing is retried.
pub trait Repository: Send + Sync {
    /// Fetch tags from the default remote. `force` overwrites moved tags.
    fn fetch_tags(&self, force: bool) -> Result<()>;

    /// List all tag names in the repository, in no particular order.
    ///
    /// Callers sort by version precedence themselves; the list order carries
    /// no meaning.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Name of the currently checked out branch
    fn current_branch(&self) -> Result<String>;

    /// Message of the HEAD commit, or `None` on an empty repository or an
    /// empty message
    fn last_commit_message(&self) -> Result<Option<String>>;

    /// Set the committer identity (and optionally commit signing) in the
    /// repository config
    fn set_identity(&self, identity: &CiIdentity, sign_commits: bool) -> Result<()>;

    /// Stage all changes and create a commit with the given message
    fn commit_all(&self, message: &str) -> Result<()>;

    /// Create a lightweight tag at HEAD
    fn create_tag(&self, name: &str) -> Result<()>;
}
