use crate::error::{GalError, Result};
use log::debug;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs an external program and hands back its standard output.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String>;
}

/// Spawns real processes inside a fixed working directory.
pub struct SystemRunner {
    workdir: PathBuf,
}

impl SystemRunner {
    pub fn new<P: AsRef<Path>>(workdir: P) -> Self {
        Self { workdir: workdir.as_ref().to_path_buf() }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String> {
        let command_line = render_command(program, args);
        debug!("running `{command_line}` in {}", self.workdir.display());

        let output = Command::new(program)
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => GalError::ToolNotFound { program: program.to_string() },
                _ => GalError::ExternalTool {
                    command: command_line.clone(),
                    message: e.to_string(),
                },
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => output.status.to_string(),
                s => s.lines().next().unwrap_or(s).to_string(),
            };
            debug!("`{command_line}` failed: {message}");
            return Err(GalError::ExternalTool { command: command_line, message });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

pub(crate) fn render_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
