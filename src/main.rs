//! krama - CLI entry point.

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use krama::git::{check_git_installed, SystemGit};
use krama::merges::{compile_patterns, locate_merge_commits, match_all};
use krama::report::render_report;

/// Report merge commits and extract title fragments from their subjects.
#[derive(Parser, Debug)]
#[command(name = "krama")]
#[command(about = "Report merge commits and extract title fragments from their subjects")]
#[command(version)]
struct Cli {
    /// Restrict to commits since midnight today; every positional argument
    /// becomes an extraction pattern
    #[arg(long)]
    today: bool,

    /// Without --today: base ref followed by extraction patterns.
    /// With --today: extraction patterns only.
    #[arg(value_name = "ARG")]
    args: Vec<String>,
}

/// Split the positional arguments into (base, since, patterns) according to
/// the invocation shape.
///
/// `--today` mode computes `since` as local midnight and treats every
/// positional as a pattern; otherwise the first positional is the base ref
/// and the rest are patterns. No positionals at all means "list every merge
/// commit in the reachable history".
fn partition_args(cli: &Cli) -> (Option<String>, Option<String>, Vec<String>) {
    if cli.today {
        let since = format!("{} 00:00:00", Local::now().date_naive());
        (None, Some(since), cli.args.clone())
    } else {
        let mut args = cli.args.iter();
        let base = args.next().cloned();
        (base, None, args.cloned().collect())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Step 1: Check prerequisites
    check_git_installed().context("git is required")?;

    // Step 2: Partition arguments and compile patterns up front
    let (base, since, pattern_sources) = partition_args(&cli);
    let patterns = compile_patterns(&pattern_sources)
        .context("Failed to compile extraction patterns")?;

    // Step 3: Locate merge commits
    let git = SystemGit::new();
    let commits = locate_merge_commits(&git, base.as_deref(), since.as_deref())
        .context("Failed to query merge commits")?;

    // Step 4: Match subjects, unless invoked in list-only mode
    let matches = if patterns.is_empty() {
        None
    } else {
        let outcome = match_all(&git, &commits, &patterns)
            .context("Failed to fetch commit subjects")?;
        for subject in &outcome.unmatched {
            eprintln!("no match: »{}«", subject);
        }
        Some(outcome.matches)
    };

    print!("{}", render_report(&commits, matches.as_deref()));

    Ok(())
}
