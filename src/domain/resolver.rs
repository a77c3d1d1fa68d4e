//! Next-tag resolution, a pure function of the latest tags and last commit.
//!
//! Stable releases bump patch by default; a last commit starting with the
//! "release:" token (or no commit at all) bumps minor instead. Pre-release
//! channels always target the next minor release of the latest stable tag and
//! carry a per-cycle counter in their suffix.

use crate::domain::branch::Channel;
use crate::domain::tag::Tag;
use crate::domain::version::Version;
use crate::error::{Result, TrackBumpError};
use regex::Regex;

/// Compute the next tag for a channel.
///
/// `stable_tag` is the latest vX.Y.Z tag and must exist; there is no fallback.
/// `latest_channel_tag` is the newest tag of the target channel (ignored for
/// stable). `last_commit_message` is only consulted for stable.
pub fn resolve_next_tag(
    stable_tag: Option<&Tag>,
    channel: Channel,
    latest_channel_tag: Option<&Tag>,
    last_commit_message: Option<&str>,
) -> Result<Tag> {
    let stable = stable_tag
        .ok_or(TrackBumpError::NoStableTag)?
        .version()?;

    // Candidate next feature release, always one minor ahead of stable
    let next_minor = Version::new(stable.major, stable.minor + 1, 0);

    let next = match channel {
        Channel::Stable => {
            if bumps_minor(last_commit_message)? {
                next_minor
            } else {
                Version::new(stable.major, stable.minor, stable.patch + 1)
            }
        }
        pre => {
            let number = match latest_channel_tag {
                None => 0,
                Some(tag) => {
                    let latest = tag.version()?;
                    if (stable.major, stable.minor) == (latest.major, latest.minor) {
                        // A stable release just shipped this cycle's target;
                        // the channel restarts numbering for the next one.
                        0
                    } else {
                        // Continue the counter. The counter is the N of
                        // "-channel.N"; a suffix-less tag in the channel list
                        // would continue from its patch slot instead, which is
                        // where the original parser carried the counter.
                        match latest.prerelease {
                            Some(p) => p.number + 1,
                            None => latest.patch + 1,
                        }
                    }
                }
            };
            next_minor.with_prerelease(pre.as_str(), number)
        }
    };

    Ok(Tag::from_version(&next))
}

/// A missing message or one starting with the "release:" token bumps minor
fn bumps_minor(last_commit_message: Option<&str>) -> Result<bool> {
    let message = match last_commit_message {
        None => return Ok(true),
        Some(m) => m,
    };

    let re = Regex::new(r"^release:")
        .map_err(|e| TrackBumpError::config(format!("Invalid release pattern: {}", e)))?;
    Ok(re.is_match(message))
}
