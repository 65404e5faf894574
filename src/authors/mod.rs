pub mod alphabetical;
pub mod commits;
pub mod loc;

use crate::error::Result;
use crate::git::{CommandRunner, GitRepo};

pub use alphabetical::authors_alphabetical;
pub use commits::authors_by_commits;
pub use loc::{authors_by_loc, rank_by_loc};

/// How the contributor list is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Alphabetical,
    Commits,
    Loc,
}

impl Order {
    pub fn header(self) -> &'static str {
        match self {
            Order::Alphabetical => "# Authors List (in alphabetical order)",
            Order::Commits => "# Authors List (in descending order, amount of commits)",
            Order::Loc => "# Authors List (in descending order, amount of modified LOC)",
        }
    }

    /// Display strings of every contributor, in this order.
    pub fn collect<R: CommandRunner>(self, repo: &GitRepo<R>, progress: bool) -> Result<Vec<String>> {
        match self {
            Order::Alphabetical => authors_alphabetical(repo),
            Order::Commits => authors_by_commits(repo),
            Order::Loc => authors_by_loc(repo, progress),
        }
    }
}
