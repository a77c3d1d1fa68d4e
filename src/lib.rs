pub mod bump;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;
pub mod version_files;

pub use error::{Result, TrackBumpError};
