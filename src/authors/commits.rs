use crate::error::Result;
use crate::git::{CommandRunner, GitRepo};
use crate::identity::strip_count;

/// Contributors ordered by commit count, highest first.
///
/// `git shortlog --numbered` already sorts by count (ties by name), so the
/// order of its output is kept as-is. Reading stops at the first blank line.
pub fn authors_by_commits<R: CommandRunner>(repo: &GitRepo<R>) -> Result<Vec<String>> {
    let summary = repo.shortlog()?;
    Ok(summary
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .take_while(|l| !l.is_empty())
        .map(|l| strip_count(l).to_string())
        .collect())
}
