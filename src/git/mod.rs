//! Git invocation layer.

pub mod runner;

pub use runner::{check_git_installed, GitRunner, SystemGit};
