use crate::config::Config;
use crate::git::GitRepo;
use crate::output::OutputDocument;
use crate::{CMD_NAME, VERSION};
use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use console::{style, Term};
use log::{info, LevelFilter};
use std::ffi::OsString;
use std::path::Path;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

const CONTACT: &str = "Contact:
  If you find the bugs, please report the content of the error.
  [GitHub Issue] https://github.com/nao1215/gal/issues";

#[derive(Parser, Debug)]
#[command(name = "gal")]
#[command(about = "Generate AUTHORS.md from git history")]
#[command(disable_version_flag = true)]
#[command(after_help = CONTACT)]
pub struct Cli {
    #[arg(short = 'l', long = "loc", help = "Sort authors by amount of modified LOC (descending order, default: alphabetical order)")]
    pub loc: bool,

    #[arg(short = 'c', long = "commit", help = "Sort authors by amount of commits (descending order, default: alphabetical order)")]
    pub commit: bool,

    #[arg(short = 'v', long = "version", help = "Show gal command version")]
    pub version: bool,

    #[arg(long = "branch", value_name = "NAME", help = "Branch to read history from, tried in order (default: main, then master)")]
    pub branches: Vec<String>,

    #[arg(long, value_name = "LEVEL", default_value = "warn", help = "Log verbosity: off, error, warn, info, debug, trace")]
    pub log_level: LevelFilter,
}

impl Cli {
    pub fn execute(self, workdir: &Path) -> Result<()> {
        init_logging(self.log_level);

        if self.version {
            println!("{CMD_NAME} version {VERSION} (under Apache License version 2.0)");
            return Ok(());
        }

        let config = Config::from_cli(&self, workdir)?;
        run(&config, Term::stderr().is_term())
    }
}

/// Check the environment, collect authors in the configured order and
/// write the output file.
pub fn run(config: &Config, progress: bool) -> Result<()> {
    let repo = GitRepo::open(&config.workdir, config.branches.clone())?;

    let authors = config
        .order
        .collect(&repo, progress)
        .context("failed to collect authors")?;

    let written = OutputDocument::new(config.order.header(), authors)
        .write_to(&config.output, &config.bot_markers)
        .with_context(|| format!("failed to write {}", config.output.display()))?;

    info!("wrote {written} authors to {}", config.output.display());
    Ok(())
}

/// Parse `args`, run inside `workdir` and hand the exit status to
/// `terminate`. The binary passes `std::process::exit`; tests pass a
/// closure that records the status.
pub fn main_with<I, T, F>(args: I, workdir: &Path, terminate: F)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    F: FnOnce(i32),
{
    terminate(run_with(args, workdir))
}

/// Same as [`main_with`] but returns the exit status.
pub fn run_with<I, T>(args: I, workdir: &Path) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => return usage(e),
    };

    match cli.execute(workdir) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report(&e);
            EXIT_FAILURE
        }
    }
}

/// Print a one-line diagnostic prefixed with the command name.
pub fn report(err: &anyhow::Error) {
    console::set_colors_enabled_stderr(Term::stderr().is_term());
    eprintln!("{}: {err:#}", style(CMD_NAME).for_stderr().red().bold());
}

fn usage(e: clap::Error) -> i32 {
    // help output already carries the contact footer
    let _ = e.print();
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
        _ => {
            println!("{CONTACT}");
            EXIT_FAILURE
        }
    }
}

fn init_logging(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .try_init();
}
