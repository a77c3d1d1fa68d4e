use crate::error::{Result, TrackBumpError};
use std::cmp::Ordering;
use std::fmt;

/// Pre-release suffix of a version (e.g. "beta.1" in "0.2.0-beta.1")
///
/// The channel name is passed through unvalidated apart from the no-dot rule;
/// callers supply known channel names. The number is the per-cycle counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreRelease {
    pub channel: String,
    pub number: u32,
}

impl PreRelease {
    /// Create a new pre-release suffix
    pub fn new(channel: impl Into<String>, number: u32) -> Self {
        PreRelease {
            channel: channel.into(),
            number,
        }
    }

    /// Parse a pre-release suffix of the exact form "name.N"
    pub fn parse(s: &str) -> Result<Self> {
        let (channel, number) = s.split_once('.').ok_or_else(|| {
            TrackBumpError::version(format!(
                "Invalid pre-release suffix: '{}' - expected NAME.N",
                s
            ))
        })?;

        if channel.is_empty() {
            return Err(TrackBumpError::version(format!(
                "Empty pre-release channel in '{}'",
                s
            )));
        }

        let number = number.parse::<u32>().map_err(|_| {
            TrackBumpError::version(format!("Invalid pre-release number: '{}'", number))
        })?;

        Ok(PreRelease::new(channel, number))
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.channel, self.number)
    }
}

/// Semantic version with an optional pre-release suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub prerelease: Option<PreRelease>,
}

impl Version {
    /// Create a release version (no pre-release suffix)
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: None,
        }
    }

    /// Attach a pre-release suffix to this version
    pub fn with_prerelease(mut self, channel: impl Into<String>, number: u32) -> Self {
        self.prerelease = Some(PreRelease::new(channel, number));
        self
    }

    /// Parse a version string of the exact form "X.Y.Z" or "X.Y.Z-name.N".
    ///
    /// A leading 'v' or 'V' prefix is tolerated so tag names parse directly.
    /// Anything else is rejected; no partial parse is accepted.
    pub fn parse(text: &str) -> Result<Self> {
        let clean = text.trim_start_matches('v').trim_start_matches('V');

        let (core, suffix) = match clean.split_once('-') {
            Some((core, suffix)) => (core, Some(suffix)),
            None => (clean, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() != 3 {
            return Err(TrackBumpError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z or X.Y.Z-name.N",
                text
            )));
        }

        let major = parts[0].parse::<u32>().map_err(|_| {
            TrackBumpError::version(format!("Invalid major version: {}", parts[0]))
        })?;
        let minor = parts[1].parse::<u32>().map_err(|_| {
            TrackBumpError::version(format!("Invalid minor version: {}", parts[1]))
        })?;
        let patch = parts[2].parse::<u32>().map_err(|_| {
            TrackBumpError::version(format!("Invalid patch version: {}", parts[2]))
        })?;

        let prerelease = match suffix {
            Some(s) => Some(PreRelease::parse(s)?),
            None => None,
        };

        Ok(Version {
            major,
            minor,
            patch,
            prerelease,
        })
    }

    /// True when this version has no pre-release suffix
    pub fn is_stable(&self) -> bool {
        self.prerelease.is_none()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.prerelease, &other.prerelease) {
                (None, None) => Ordering::Equal,
                // A release outranks any pre-release of the same triple
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a
                    .channel
                    .cmp(&b.channel)
                    .then_with(|| a.number.cmp(&b.number)),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("v1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
        assert!(v.is_stable());
    }

    #[test]
    fn test_version_parse_without_v() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_uppercase_v() {
        let v = Version::parse("V1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_prerelease() {
        let v = Version::parse("v0.2.0-beta.1").unwrap();
        assert_eq!(v, Version::new(0, 2, 0).with_prerelease("beta", 1));
        assert!(!v.is_stable());
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("v1.2.3.4").is_err());
        assert!(Version::parse("a.b.c").is_err());
        assert!(Version::parse("").is_err());
    }

    #[test]
    fn test_version_parse_invalid_prerelease() {
        // missing counter
        assert!(Version::parse("1.2.3-beta").is_err());
        // non-numeric counter
        assert!(Version::parse("1.2.3-beta.x").is_err());
        // dot in channel name
        assert!(Version::parse("1.2.3-beta.extra.1").is_err());
        // empty channel
        assert!(Version::parse("1.2.3-.1").is_err());
    }

    #[test]
    fn test_version_round_trip() {
        for text in ["0.1.0", "1.2.3", "0.2.0-beta.0", "10.20.30-rc.42"] {
            let v = Version::parse(text).unwrap();
            assert_eq!(Version::parse(&v.to_string()).unwrap(), v);
            assert_eq!(v.to_string(), text);
        }
    }

    #[test]
    fn test_version_display_prerelease() {
        let v = Version::new(0, 2, 0).with_prerelease("rc", 3);
        assert_eq!(v.to_string(), "0.2.0-rc.3");
    }

    #[test]
    fn test_version_ordering() {
        let a = Version::parse("0.9.0").unwrap();
        let b = Version::parse("0.10.0").unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_version_ordering_release_beats_prerelease() {
        let pre = Version::parse("0.2.0-beta.5").unwrap();
        let rel = Version::parse("0.2.0").unwrap();
        assert!(rel > pre);
    }

    #[test]
    fn test_version_ordering_prerelease_counter() {
        let a = Version::parse("0.2.0-beta.1").unwrap();
        let b = Version::parse("0.2.0-beta.2").unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_prerelease_parse() {
        let pre = PreRelease::parse("beta.1").unwrap();
        assert_eq!(pre.channel, "beta");
        assert_eq!(pre.number, 1);
    }

    #[test]
    fn test_prerelease_parse_invalid() {
        assert!(PreRelease::parse("beta").is_err());
        assert!(PreRelease::parse(".1").is_err());
        assert!(PreRelease::parse("beta.").is_err());
    }
}
