//! Git history queries via the system `git` binary.
//!
//! All operations use `std::process::Command` to shell out to the system `git`
//! binary, inheriting the user's existing git config. The two queries the
//! report needs are behind the [`GitRunner`] trait so the locating and
//! matching logic can be tested against a stub instead of a real repository.

use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, warn};

use crate::error::GitError;

/// The two history queries the report pipeline issues.
///
/// Implementations return raw UTF-8 stdout; an empty or failed query yields
/// an empty string, never an error. Only an unrunnable git binary is a hard
/// failure.
pub trait GitRunner {
    /// `git log --pretty=tformat:%h,%p`, optionally restricted to
    /// `base..HEAD` and/or `--since=<since>`.
    fn log(&self, base: Option<&str>, since: Option<&str>) -> Result<String, GitError>;

    /// `git show --no-patch --pretty=tformat:%s <hash>`. The first line of the
    /// returned text is the commit subject.
    fn show_subject(&self, hash: &str) -> Result<String, GitError>;
}

/// [`GitRunner`] backed by the system `git` binary.
pub struct SystemGit {
    workdir: Option<PathBuf>,
}

impl SystemGit {
    /// Run git in the current working directory.
    pub fn new() -> Self {
        Self { workdir: None }
    }

    /// Run git inside `dir` instead of the current working directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(dir.into()),
        }
    }

    /// Run a git command and return its stdout.
    ///
    /// A non-zero exit (not a repository, unknown ref) is absorbed: the stderr
    /// is logged and whatever stdout git produced is returned, so downstream
    /// parsing sees an empty range rather than an error.
    fn run_git(&self, args: &[&str], operation: &str) -> Result<String, GitError> {
        let mut cmd = Command::new("git");
        cmd.args(args);
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        debug!("running git {}", args.join(" "));

        let output = cmd.output().map_err(|e| GitError::SpawnFailed {
            operation: operation.to_string(),
            source: e,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                "git {} exited with {}: {}",
                operation,
                output.status,
                stderr.trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRunner for SystemGit {
    fn log(&self, base: Option<&str>, since: Option<&str>) -> Result<String, GitError> {
        let mut args = vec!["log".to_string(), "--pretty=tformat:%h,%p".to_string()];
        if let Some(base) = base {
            args.push(format!("{}..HEAD", base));
        }
        if let Some(since) = since {
            args.push(format!("--since={}", since));
        }

        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        self.run_git(&arg_refs, "log")
    }

    fn show_subject(&self, hash: &str) -> Result<String, GitError> {
        self.run_git(
            &["show", "--no-patch", "--pretty=tformat:%s", hash],
            "show",
        )
    }
}

/// Check that the `git` binary is installed and accessible.
///
/// Uses the `which` crate for cross-platform executable detection.
pub fn check_git_installed() -> Result<(), GitError> {
    if which::which("git").is_err() {
        return Err(GitError::NotInstalled);
    }
    Ok(())
}
