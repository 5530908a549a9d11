//! Subject matching against ordered extraction patterns.

use regex_lite::Regex;

use crate::error::{GitError, PatternError};
use crate::git::GitRunner;

/// A compiled extraction pattern, guaranteed to carry at least one capture
/// group.
#[derive(Debug, Clone)]
pub struct ExtractionPattern {
    source: String,
    regex: Regex,
}

impl ExtractionPattern {
    /// Compile a pattern, rejecting invalid regexes and regexes without a
    /// capture group to extract.
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(source)
            .map_err(|e| PatternError::Invalid(source.to_string(), e))?;

        // captures_len counts the implicit whole-match group 0
        if regex.captures_len() < 2 {
            return Err(PatternError::NoCaptureGroup(source.to_string()));
        }

        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// The pattern as the user supplied it.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The first capture group's text, if this pattern matches anywhere in
    /// `subject`.
    pub fn capture(&self, subject: &str) -> Option<String> {
        self.regex
            .captures(subject)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

/// Compile a list of raw pattern strings, stopping at the first bad one.
pub fn compile_patterns(sources: &[String]) -> Result<Vec<ExtractionPattern>, PatternError> {
    sources.iter().map(|s| ExtractionPattern::parse(s)).collect()
}

/// Evaluate patterns in order against a subject; the first pattern that
/// matches wins and later patterns are not consulted.
pub fn first_capture(patterns: &[ExtractionPattern], subject: &str) -> Option<String> {
    patterns.iter().find_map(|p| p.capture(subject))
}

/// Result of matching a batch of commit subjects.
#[derive(Debug, Default)]
pub struct MatchOutcome {
    /// First-capture text per matched commit, in input commit order.
    pub matches: Vec<String>,
    /// Subjects that matched no pattern, in input commit order.
    pub unmatched: Vec<String>,
}

/// Fetch each commit's subject line and extract the first matching capture.
///
/// Commits whose subject matches no pattern contribute to `unmatched` instead
/// of aborting the batch; the caller reports them on stderr.
pub fn match_all(
    git: &dyn GitRunner,
    commits: &[String],
    patterns: &[ExtractionPattern],
) -> Result<MatchOutcome, GitError> {
    let mut outcome = MatchOutcome::default();

    for hash in commits {
        let message = git.show_subject(hash)?;
        let subject = message.lines().next().unwrap_or("");

        match first_capture(patterns, subject) {
            Some(text) => outcome.matches.push(text),
            None => outcome.unmatched.push(subject.to_string()),
        }
    }

    Ok(outcome)
}
