use crate::authors::Order;
use crate::cli::Cli;
use crate::error::{GalError, Result};
use crate::git::DEFAULT_BRANCHES;
use crate::output::{BOT_MARKERS, OUTPUT_FILE};
use std::path::{Path, PathBuf};

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub order: Order,
    pub branches: Vec<String>,
    pub output: PathBuf,
    pub bot_markers: Vec<String>,
    pub workdir: PathBuf,
}

impl Config {
    pub fn new<P: AsRef<Path>>(workdir: P, order: Order) -> Self {
        let workdir = workdir.as_ref().to_path_buf();
        Self {
            order,
            branches: DEFAULT_BRANCHES.iter().map(|b| b.to_string()).collect(),
            output: workdir.join(OUTPUT_FILE),
            bot_markers: BOT_MARKERS.iter().map(|m| m.to_string()).collect(),
            workdir,
        }
    }

    pub fn from_cli(cli: &Cli, workdir: &Path) -> Result<Self> {
        let order = match (cli.commit, cli.loc) {
            (true, true) => {
                return Err(GalError::Configuration(
                    "can not specify --commit option and --loc at same time".to_string(),
                ))
            }
            (true, false) => Order::Commits,
            (false, true) => Order::Loc,
            (false, false) => Order::Alphabetical,
        };

        let mut config = Self::new(workdir, order);
        if !cli.branches.is_empty() {
            config.branches = cli.branches.clone();
        }
        Ok(config)
    }
}
