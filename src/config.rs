use crate::error::{Result, TrackBumpError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names probed in the project directory, in order
pub const CONFIG_FILES: [&str; 2] = [".trackbump.toml", "trackbump.toml"];

/// Project configuration for track-bump.
///
/// Carries the current version, the files to patch on a bump, the commit
/// message template, and the name of the stable branch.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BumpConfig {
    /// Current project version, without the tag's 'v' prefix
    pub version: String,

    /// Files to patch, as "path" or "path:locator" entries. With a locator,
    /// only lines containing it are touched.
    #[serde(default)]
    pub version_files: Vec<String>,

    /// Commit message template with {current_version} and {new_version}
    /// placeholders
    #[serde(default = "default_bump_message")]
    pub bump_message: String,

    /// Branch that produces stable releases
    #[serde(default = "default_main_branch")]
    pub main_branch: String,
}

fn default_bump_message() -> String {
    "bump: {current_version} \u{2192} {new_version}".to_string()
}

fn default_main_branch() -> String {
    "main".to_string()
}

impl BumpConfig {
    /// Render the bump commit message for a version change
    pub fn commit_message(&self, current_version: &str, new_version: &str) -> String {
        self.bump_message
            .replace("{current_version}", current_version)
            .replace("{new_version}", new_version)
    }
}

/// Locate the config file in a project directory.
///
/// Probes [CONFIG_FILES] in order and returns the first that exists.
pub fn find_config_file(project_path: &Path) -> Result<PathBuf> {
    for name in CONFIG_FILES {
        let candidate = project_path.join(name);
        if candidate.exists() {
            return Ok(candidate);
        }
    }
    Err(TrackBumpError::config(format!(
        "Could not find any of the following files: {:?} in {}",
        CONFIG_FILES,
        project_path.display()
    )))
}

/// Load and parse a config file
pub fn load_config(path: &Path) -> Result<BumpConfig> {
    let content = fs::read_to_string(path)?;
    let config: BumpConfig = toml::from_str(&content)
        .map_err(|e| TrackBumpError::config(format!("{}: {}", path.display(), e)))?;
    Ok(config)
}

/// Committer identity used for the bump commit.
///
/// Passed explicitly into git setup rather than read from ambient process
/// state, so the workflow stays testable without environment mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CiIdentity {
    pub user: String,
    pub email: String,
}

impl CiIdentity {
    /// Read the identity from CI_USER / CI_USER_EMAIL.
    ///
    /// Fails with [TrackBumpError::MissingCredential] when either is unset or
    /// empty, naming the offending variable.
    pub fn from_env() -> Result<Self> {
        let user = required_env("CI_USER")?;
        let email = required_env("CI_USER_EMAIL")?;
        Ok(CiIdentity { user, email })
    }
}

fn required_env(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| TrackBumpError::MissingCredential(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_minimal_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "trackbump.toml", "version = \"0.1.0\"\n");

        let config = load_config(&path).unwrap();
        assert_eq!(config.version, "0.1.0");
        assert!(config.version_files.is_empty());
        assert_eq!(config.main_branch, "main");
        assert!(config.bump_message.contains("{new_version}"));
    }

    #[test]
    fn test_load_full_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "trackbump.toml",
            r#"
version = "1.2.3"
version_files = ["Cargo.toml:version", "README.md"]
bump_message = "release {current_version} to {new_version}"
main_branch = "master"
"#,
        );

        let config = load_config(&path).unwrap();
        assert_eq!(config.version, "1.2.3");
        assert_eq!(config.version_files.len(), 2);
        assert_eq!(config.main_branch, "master");
    }

    #[test]
    fn test_load_config_missing_version() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "trackbump.toml", "main_branch = \"main\"\n");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, TrackBumpError::Config(_)));
    }

    #[test]
    fn test_find_config_file_prefers_hidden() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, ".trackbump.toml", "version = \"0.1.0\"\n");
        write_config(&dir, "trackbump.toml", "version = \"9.9.9\"\n");

        let found = find_config_file(dir.path()).unwrap();
        assert!(found.ends_with(".trackbump.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = TempDir::new().unwrap();
        let err = find_config_file(dir.path()).unwrap_err();
        assert!(err.to_string().contains("trackbump.toml"));
    }

    #[test]
    fn test_commit_message_template() {
        let config = BumpConfig {
            version: "0.1.0".to_string(),
            version_files: vec![],
            bump_message: "bump: {current_version} -> {new_version}".to_string(),
            main_branch: "main".to_string(),
        };
        assert_eq!(
            config.commit_message("0.1.0", "0.2.0"),
            "bump: 0.1.0 -> 0.2.0"
        );
    }
}
