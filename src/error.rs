use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GalError>;

#[derive(Error, Debug)]
pub enum GalError {
    #[error("{program} command does not exist. You need {program} command to execute gal command")]
    ToolNotFound { program: String },
    #[error("{} directory does not exist", path.display())]
    NotARepository { path: PathBuf },
    #[error("this repository has none of the branches [{}]: {message}", branches.join(", "))]
    NoPrimaryBranch { branches: Vec<String>, message: String },
    #[error("can not get amount of modified LOC: '{value}' is not a number (line: '{line}')")]
    MalformedNumber { value: String, line: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Configuration(String),
    #[error("'{command}' failed: {message}")]
    ExternalTool { command: String, message: String },
}
