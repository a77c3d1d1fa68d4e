use crate::domain::branch::Channel;
use crate::domain::version::Version;
use crate::error::{Result, TrackBumpError};
use regex::Regex;
use std::fmt;

/// A git tag carrying a version, formatted with a leading 'v'
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a tag from an existing tag name
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Format a version as a tag ("0.2.0-beta.1" -> "v0.2.0-beta.1")
    pub fn from_version(version: &Version) -> Self {
        Tag {
            name: format!("v{}", version),
        }
    }

    /// Parse the version carried by this tag
    pub fn version(&self) -> Result<Version> {
        Version::parse(&self.name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Pattern matching stable tags (vX.Y.Z with no suffix)
pub fn stable_tag_pattern() -> Result<Regex> {
    compile(r"^v\d+\.\d+\.\d+$")
}

/// Pattern matching pre-release tags of the given channel (vX.Y.Z-channel.N)
pub fn prerelease_tag_pattern(channel: Channel) -> Result<Regex> {
    compile(&format!(
        r"^v\d+\.\d+\.\d+-{}\.\d+$",
        regex::escape(channel.as_str())
    ))
}

/// Pattern matching the tag series of a channel.
///
/// The stable channel has no suffix, so it gets the stable pattern.
pub fn tag_pattern_for(channel: Channel) -> Result<Regex> {
    match channel {
        Channel::Stable => stable_tag_pattern(),
        other => prerelease_tag_pattern(other),
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| TrackBumpError::tag(format!("Invalid tag pattern '{}': {}", pattern, e)))
}

/// Find the newest tag matching the pattern, by version precedence.
///
/// The input order is ignored: tags are parsed and compared as versions, so
/// "v0.10.0" beats "v0.9.0" even when the list is lexically sorted. Tags that
/// match the pattern but fail to parse are skipped.
pub fn latest_matching(tags: &[String], pattern: &Regex) -> Option<Tag> {
    tags.iter()
        .filter(|name| pattern.is_match(name))
        .filter_map(|name| Version::parse(name).ok().map(|v| (v, name)))
        .max_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, name)| Tag::new(name.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tag_from_version() {
        let v = Version::new(0, 2, 0).with_prerelease("beta", 1);
        assert_eq!(Tag::from_version(&v).name, "v0.2.0-beta.1");
    }

    #[test]
    fn test_tag_version_round_trip() {
        let v = Version::new(1, 2, 3);
        assert_eq!(Tag::from_version(&v).version().unwrap(), v);
    }

    #[test]
    fn test_stable_pattern() {
        let re = stable_tag_pattern().unwrap();
        assert!(re.is_match("v1.2.3"));
        assert!(!re.is_match("v1.2.3-beta.0"));
        assert!(!re.is_match("1.2.3"));
        assert!(!re.is_match("v1.2"));
    }

    #[test]
    fn test_prerelease_pattern() {
        let re = prerelease_tag_pattern(Channel::Beta).unwrap();
        assert!(re.is_match("v0.2.0-beta.1"));
        assert!(!re.is_match("v0.2.0-rc.1"));
        assert!(!re.is_match("v0.2.0"));
        assert!(!re.is_match("v0.2.0-beta.x"));
    }

    #[test]
    fn test_tag_pattern_for_stable_channel() {
        let re = tag_pattern_for(Channel::Stable).unwrap();
        assert!(re.is_match("v1.0.0"));
        assert!(!re.is_match("v1.0.0-stable.0"));
    }

    #[test]
    fn test_latest_matching_version_precedence() {
        let re = stable_tag_pattern().unwrap();
        let all = tags(&["v0.10.0", "v0.2.0", "v0.9.1"]);
        assert_eq!(latest_matching(&all, &re).unwrap().name, "v0.10.0");
    }

    #[test]
    fn test_latest_matching_filters_channel() {
        let re = prerelease_tag_pattern(Channel::Rc).unwrap();
        let all = tags(&["v0.2.0", "v0.2.0-beta.3", "v0.2.0-rc.1", "v0.2.0-rc.0"]);
        assert_eq!(latest_matching(&all, &re).unwrap().name, "v0.2.0-rc.1");
    }

    #[test]
    fn test_latest_matching_none() {
        let re = stable_tag_pattern().unwrap();
        assert_eq!(latest_matching(&[], &re), None);
        assert_eq!(latest_matching(&tags(&["v0.1.0-beta.0"]), &re), None);
    }
}
