//! Bump workflow orchestration.
//!
//! Wires the pure domain logic (classifier, tag queries, resolver) to the
//! config and git collaborators. All effects go through the [Repository]
//! trait, so the workflow runs unchanged against a real repository or the
//! in-memory mock.

use crate::config::{self, BumpConfig, CiIdentity};
use crate::domain::{
    classify, latest_matching, prerelease_tag_pattern, resolve_next_tag, stable_tag_pattern,
    tag_pattern_for, Channel, Tag,
};
use crate::error::{Result, TrackBumpError};
use crate::git::Repository;
use crate::version_files::{replace_in_files, VersionFileEntry};
use std::path::Path;

/// Options for a bump run
#[derive(Debug, Clone, Default)]
pub struct BumpOptions {
    /// Branch to bump; defaults to the checked out branch
    pub branch: Option<String>,

    /// Enable commit signing in the repository config
    pub sign_commits: bool,

    /// Report what would happen without mutating anything
    pub dry_run: bool,

    /// Force-refetch tags from the remote
    pub force_fetch: bool,
}

/// What a bump run resolved and (unless dry-run) performed
#[derive(Debug, Clone)]
pub struct BumpOutcome {
    pub branch: String,
    pub channel: Channel,
    pub stable_tag: Tag,
    pub latest_channel_tag: Option<Tag>,
    pub current_version: String,
    pub new_version: String,
    pub tag: Tag,
    pub commit_message: String,
    pub files: Vec<String>,
    pub dry_run: bool,
}

/// Bump the project version: resolve the next tag for the branch's channel,
/// patch version files, commit, and tag.
///
/// In dry-run mode the resolution still runs against fetched tags but nothing
/// is mutated, not even the repository's committer identity. The identity is
/// required up front for non-dry runs so credential problems surface before
/// any mutating operation.
pub fn bump_project(
    repo: &dyn Repository,
    project_path: &Path,
    identity: Option<&CiIdentity>,
    options: &BumpOptions,
) -> Result<BumpOutcome> {
    let config_path = config::find_config_file(project_path)?;
    let config = config::load_config(&config_path)?;

    let identity = match (options.dry_run, identity) {
        (true, _) => None,
        (false, Some(identity)) => Some(identity),
        (false, None) => return Err(TrackBumpError::MissingCredential("CI_USER".to_string())),
    };

    repo.fetch_tags(options.force_fetch)?;
    let tags = repo.list_tags()?;

    let stable_tag = latest_matching(&tags, &stable_tag_pattern()?)
        .ok_or(TrackBumpError::NoStableTag)?;

    let branch = match &options.branch {
        Some(branch) => branch.clone(),
        None => repo.current_branch()?,
    };
    let channel = classify(&branch, &config.main_branch)?;

    let latest_channel_tag = match channel {
        Channel::Stable => None,
        pre => latest_matching(&tags, &prerelease_tag_pattern(pre)?),
    };
    let last_commit_message = match channel {
        Channel::Stable => repo.last_commit_message()?,
        _ => None,
    };

    let tag = resolve_next_tag(
        Some(&stable_tag),
        channel,
        latest_channel_tag.as_ref(),
        last_commit_message.as_deref(),
    )?;
    let new_version = tag.name.trim_start_matches('v').to_string();

    let entries = version_file_entries(&config, &config_path);
    let commit_message = config.commit_message(&config.version, &new_version);

    if let Some(identity) = identity {
        repo.set_identity(identity, options.sign_commits)?;
        replace_in_files(project_path, &entries, &config.version, &new_version)?;
        repo.commit_all(&commit_message)?;
        repo.create_tag(&tag.name)?;
    }

    Ok(BumpOutcome {
        branch,
        channel,
        stable_tag,
        latest_channel_tag,
        current_version: config.version,
        new_version,
        tag,
        commit_message,
        files: entries
            .iter()
            .map(|e| match &e.locator {
                Some(locator) => format!("{}:{}", e.path, locator),
                None => e.path.clone(),
            })
            .collect(),
        dry_run: options.dry_run,
    })
}

/// Files to patch: the configured entries plus the config file's own
/// version field
fn version_file_entries(config: &BumpConfig, config_path: &Path) -> Vec<VersionFileEntry> {
    let mut entries: Vec<VersionFileEntry> = config
        .version_files
        .iter()
        .map(|entry| VersionFileEntry::parse(entry))
        .collect();

    if let Some(name) = config_path.file_name().and_then(|n| n.to_str()) {
        entries.push(VersionFileEntry {
            path: name.to_string(),
            locator: Some("version".to_string()),
        });
    }

    entries
}

/// Latest existing tag for a branch: the stable series for the main branch,
/// the branch's channel series otherwise.
pub fn latest_tag_for_branch(
    repo: &dyn Repository,
    branch: &str,
    main_branch: &str,
) -> Result<Option<Tag>> {
    let channel = classify(branch, main_branch)?;
    let tags = repo.list_tags()?;
    Ok(latest_matching(&tags, &tag_pattern_for(channel)?))
}
