use crate::error::{Result, TrackBumpError};
use regex::Regex;
use std::fmt;

/// Release channel a branch publishes to.
///
/// Each channel is an independent track with its own tag series; there is no
/// implicit ranking between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Beta,
    Rc,
    Stable,
}

impl Channel {
    /// Channel name as it appears in tag suffixes (e.g. "-beta.0")
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Beta => "beta",
            Channel::Rc => "rc",
            Channel::Stable => "stable",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a branch name into its release channel.
///
/// Rules are evaluated in fixed order, first match wins. The order is part of
/// the contract: "release/develop" must hit the release rule, and the rules
/// are kept as an ordered sequence rather than a map so the match is
/// deterministic as rules grow.
pub fn classify(branch: &str, main_branch: &str) -> Result<Channel> {
    let rules = [
        (r"^develop$".to_string(), Channel::Beta),
        (r"^release/.*".to_string(), Channel::Rc),
        (format!("^{}$", regex::escape(main_branch)), Channel::Stable),
    ];

    for (pattern, channel) in &rules {
        let re = Regex::new(pattern)
            .map_err(|e| TrackBumpError::config(format!("Invalid branch rule: {}", e)))?;
        if re.is_match(branch) {
            return Ok(*channel);
        }
    }

    Err(TrackBumpError::UnsupportedBranch(branch.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_develop() {
        assert_eq!(classify("develop", "main").unwrap(), Channel::Beta);
    }

    #[test]
    fn test_classify_release_branch() {
        assert_eq!(classify("release/x", "main").unwrap(), Channel::Rc);
        assert_eq!(classify("release/1.2", "main").unwrap(), Channel::Rc);
    }

    #[test]
    fn test_classify_main_branch() {
        assert_eq!(classify("main", "main").unwrap(), Channel::Stable);
        assert_eq!(classify("master", "master").unwrap(), Channel::Stable);
    }

    #[test]
    fn test_classify_release_develop_is_rc() {
        // "develop" is an exact match only; the release prefix rule wins here
        assert_eq!(classify("release/develop", "main").unwrap(), Channel::Rc);
    }

    #[test]
    fn test_classify_unsupported() {
        let err = classify("foo", "main").unwrap_err();
        assert!(matches!(err, TrackBumpError::UnsupportedBranch(ref b) if b == "foo"));
        assert_eq!(err.to_string(), "Branch 'foo' is not supported");
    }

    #[test]
    fn test_classify_main_is_exact_match() {
        assert!(classify("main-backup", "main").is_err());
        assert!(classify("not-main", "main").is_err());
    }

    #[test]
    fn test_classify_is_deterministic() {
        assert_eq!(
            classify("develop", "main").unwrap(),
            classify("develop", "main").unwrap()
        );
    }

    #[test]
    fn test_channel_display() {
        assert_eq!(Channel::Beta.to_string(), "beta");
        assert_eq!(Channel::Rc.to_string(), "rc");
        assert_eq!(Channel::Stable.to_string(), "stable");
    }
}
