pub mod authors;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod identity;
pub mod output;

pub const CMD_NAME: &str = "gal";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
