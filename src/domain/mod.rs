//! Domain logic - pure business rules independent of git operations

pub mod branch;
pub mod resolver;
pub mod tag;
pub mod version;

pub use branch::{classify, Channel};
pub use resolver::resolve_next_tag;
pub use tag::{latest_matching, prerelease_tag_pattern, stable_tag_pattern, tag_pattern_for, Tag};
pub use version::{PreRelease, Version};
