//! Version-string replacement in configured project files.
//!
//! Entries come from the config's `version_files` list as "path" or
//! "path:locator". A locator narrows the replacement to lines containing it,
//! so a "version" locator in a Cargo.toml does not touch dependency versions.

use crate::error::{Result, TrackBumpError};
use std::fs;
use std::path::{Path, PathBuf};

/// One file to patch, with an optional line locator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFileEntry {
    pub path: String,
    pub locator: Option<String>,
}

impl VersionFileEntry {
    /// Parse a "path" or "path:locator" entry
    pub fn parse(entry: &str) -> Self {
        match entry.split_once(':') {
            Some((path, locator)) => VersionFileEntry {
                path: path.to_string(),
                locator: Some(locator.to_string()),
            },
            None => VersionFileEntry {
                path: entry.to_string(),
                locator: None,
            },
        }
    }
}

/// Replace `current_version` with `new_version` in each entry's file.
///
/// Returns the paths that were actually modified. A listed file that does not
/// exist is an error; a file where nothing matched is left untouched.
pub fn replace_in_files(
    project_path: &Path,
    entries: &[VersionFileEntry],
    current_version: &str,
    new_version: &str,
) -> Result<Vec<PathBuf>> {
    let mut modified = Vec::new();

    for entry in entries {
        let path = project_path.join(&entry.path);
        if !path.exists() {
            return Err(TrackBumpError::config(format!(
                "Version file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(&path)?;
        let patched = replace_in_content(&content, entry.locator.as_deref(), current_version, new_version);

        if patched != content {
            fs::write(&path, patched)?;
            modified.push(path);
        }
    }

    Ok(modified)
}

fn replace_in_content(
    content: &str,
    locator: Option<&str>,
    current_version: &str,
    new_version: &str,
) -> String {
    let mut lines: Vec<String> = Vec::new();
    for line in content.split_inclusive('\n') {
        let eligible = match locator {
            Some(locator) => line.contains(locator),
            None => true,
        };
        if eligible {
            lines.push(line.replace(current_version, new_version));
        } else {
            lines.push(line.to_string());
        }
    }
    lines.concat()
}
