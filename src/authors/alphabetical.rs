use crate::error::Result;
use crate::git::{CommandRunner, GitRepo};
use crate::identity::{dedup, lines};

/// Every distinct `Name<email>` in history, sorted byte-wise ascending.
pub fn authors_alphabetical<R: CommandRunner>(repo: &GitRepo<R>) -> Result<Vec<String>> {
    let log = repo.author_log()?;
    let mut authors = dedup(lines(&log).map(str::to_string).collect());
    authors.sort();
    Ok(authors)
}
