//! krama - A CLI tool that reports merge commits and extracts title fragments
//! from their subject lines.
//!
//! # Overview
//!
//! krama queries git history for merge commits (commits with exactly two
//! parents) over an optional range, then searches each merge commit's subject
//! line against an ordered list of extraction patterns, first match wins.
//! Subjects matching no pattern are echoed on stderr.

pub mod error;
pub mod git;
pub mod merges;
pub mod report;

// Re-export commonly used types
pub use error::{GitError, PatternError};
pub use git::{GitRunner, SystemGit};
pub use merges::{ExtractionPattern, MatchOutcome};
