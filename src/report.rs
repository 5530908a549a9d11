//! Plain-text report formatting.

/// Render the stdout report.
///
/// The `Matches:` section is printed only when matching actually ran, i.e.
/// when patterns were supplied; `matches` is `None` otherwise. Empty sections
/// render as `(none)`.
pub fn render_report(commits: &[String], matches: Option<&[String]>) -> String {
    let mut out = String::new();

    out.push_str(&format!("Number of merge commits: {}\n\n", commits.len()));

    out.push_str("Merge commits:\n");
    push_list(&mut out, commits);
    out.push('\n');

    if let Some(matches) = matches {
        out.push_str("Matches:\n");
        push_list(&mut out, matches);
    }

    out
}

fn push_list(out: &mut String, items: &[String]) {
    if items.is_empty() {
        out.push_str("(none)\n");
    }
    for item in items {
        out.push_str(&format!("- {}\n", item));
    }
}
