use crate::error::{GalError, Result};
use super::runner::{CommandRunner, SystemRunner};
use log::debug;
use std::path::Path;

pub const GIT: &str = "git";

/// Branches tried, in order, for queries that need an explicit revision.
pub const DEFAULT_BRANCHES: [&str; 2] = ["main", "master"];

const METADATA_DIR: &str = ".git";

/// Fails with `ToolNotFound` when `git` cannot be spawned.
pub fn ensure_git_available<R: CommandRunner>(runner: &R) -> Result<()> {
    let version = runner.run(GIT, &["--version".to_string()])?;
    debug!("found {}", version.trim());
    Ok(())
}

/// Fails with `NotARepository` unless `workdir` holds a `.git` entry.
/// Worktrees and submodules use a `.git` file, so either kind counts.
pub fn ensure_repository(workdir: &Path) -> Result<()> {
    let metadata = workdir.join(METADATA_DIR);
    if metadata.exists() {
        Ok(())
    } else {
        Err(GalError::NotARepository { path: metadata })
    }
}

fn is_missing_revision(message: &str) -> bool {
    ["unknown revision", "ambiguous argument", "bad revision"]
        .iter()
        .any(|m| message.contains(m))
}

pub struct GitRepo<R = SystemRunner> {
    runner: R,
    branches: Vec<String>,
}

impl GitRepo<SystemRunner> {
    /// Open the repository rooted at `workdir` after checking that git is
    /// installed and that the directory really is a repository root.
    pub fn open<P: AsRef<Path>>(workdir: P, branches: Vec<String>) -> Result<Self> {
        let runner = SystemRunner::new(workdir);
        ensure_git_available(&runner)?;
        ensure_repository(runner.workdir())?;
        Ok(Self::with_runner(runner, branches))
    }
}

impl<R: CommandRunner> GitRepo<R> {
    pub fn with_runner(runner: R, branches: Vec<String>) -> Self {
        Self { runner, branches }
    }

    pub fn git(&self, args: &[&str]) -> Result<String> {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        self.runner.run(GIT, &args)
    }

    /// Run `git <args> <branch>` for each configured branch until one works.
    /// Only a branch that does not exist moves on to the next one; any other
    /// git failure is returned as is.
    pub fn git_on_primary_branch(&self, args: &[&str]) -> Result<String> {
        let mut last_failure = String::from("no branch configured");
        for branch in &self.branches {
            let mut full: Vec<String> = args.iter().map(|a| a.to_string()).collect();
            full.push(branch.clone());
            match self.runner.run(GIT, &full) {
                Ok(out) => return Ok(out),
                Err(GalError::ExternalTool { command, message }) if is_missing_revision(&message) => {
                    debug!("`{command}` failed, trying next branch: {message}");
                    last_failure = message;
                }
                Err(e) => return Err(e),
            }
        }
        Err(GalError::NoPrimaryBranch {
            branches: self.branches.clone(),
            message: last_failure,
        })
    }

    /// One `Name<email>` line per commit reachable from HEAD.
    pub fn author_log(&self) -> Result<String> {
        self.git(&["log", "--pretty=format:%an<%ae>"])
    }

    /// Per-author commit counts, most active author first.
    pub fn shortlog(&self) -> Result<String> {
        self.git_on_primary_branch(&["shortlog", "--numbered", "--summary", "--email"])
    }

    /// `--numstat` lines of every non-merge commit authored by `email`.
    pub fn numstat_for(&self, email: &str) -> Result<String> {
        let author = format!("--author=<{email}>");
        self.git_on_primary_branch(&[
            "log",
            "--fixed-strings",
            author.as_str(),
            "--numstat",
            "--pretty=",
            "--no-merges",
        ])
    }
}
