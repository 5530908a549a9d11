//! Locating merge commits in `git log` output.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::error::GitError;
use crate::git::GitRunner;

/// One `--pretty=tformat:%h,%p` line for a merge commit: short hash followed
/// by exactly two parent hashes. Compiled once, reused for every log line.
static MERGE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9a-fA-F]+),([0-9a-fA-F]+) ([0-9a-fA-F]+)$").unwrap());

/// Parse one `--pretty=tformat:%h,%p` log line into the short hash of a merge
/// commit.
///
/// A line qualifies iff it lists exactly two parent hashes. Single-parent
/// commits, root commits, octopus merges (3+ parents), and malformed lines
/// all return `None`.
pub fn parse_merge_line(line: &str) -> Option<String> {
    MERGE_LINE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Locate merge commits in `base..HEAD` (or the whole reachable history when
/// `base` is `None`), optionally restricted to commits since `since`.
///
/// Short hashes are returned in the order the log emits them, newest first.
/// An empty or failed range yields an empty vec, never an error.
pub fn locate_merge_commits(
    git: &dyn GitRunner,
    base: Option<&str>,
    since: Option<&str>,
) -> Result<Vec<String>, GitError> {
    let output = git.log(base, since)?;

    Ok(output.lines().filter_map(parse_merge_line).collect())
}
