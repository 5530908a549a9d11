//! Merge-commit location and subject matching.

pub mod locate;
pub mod matcher;

pub use locate::{locate_merge_commits, parse_merge_line};
pub use matcher::{compile_patterns, first_capture, match_all, ExtractionPattern, MatchOutcome};
