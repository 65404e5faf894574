pub mod repo;
pub mod runner;

pub use repo::{ensure_git_available, ensure_repository, GitRepo, DEFAULT_BRANCHES, GIT};
pub use runner::{CommandRunner, SystemRunner};
