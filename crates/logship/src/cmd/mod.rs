use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::exit::CliResult;

pub mod check;
pub mod send;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ship one message to the collector as a single frame.
    Send(SendArgs),
    /// Probe collector reachability.
    Check(CheckArgs),
}

pub fn run(command: Command) -> CliResult<i32> {
    match command {
        Command::Send(args) => send::run(args),
        Command::Check(args) => check::run(args),
    }
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Collector socket path.
    #[arg(
        env = logship_client::SOCKET_PATH_ENV,
        default_value = logship_client::DEFAULT_SOCKET_PATH
    )]
    pub path: PathBuf,
    /// Raw string payload.
    #[arg(long, conflicts_with_all = ["json", "file"])]
    pub data: Option<String>,
    /// JSON payload (validated before shipping).
    #[arg(long, conflicts_with_all = ["data", "file"])]
    pub json: Option<String>,
    /// Read payload from file.
    #[arg(long, conflicts_with_all = ["json", "data"])]
    pub file: Option<PathBuf>,
    /// Client id stamped on the frame. Defaults to this process's id.
    #[arg(long)]
    pub client_id: Option<i32>,
    /// Write timeout (e.g. 5s, 500ms).
    #[arg(long, default_value = "5s")]
    pub timeout: String,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Collector socket path.
    #[arg(
        env = logship_client::SOCKET_PATH_ENV,
        default_value = logship_client::DEFAULT_SOCKET_PATH
    )]
    pub path: PathBuf,
}
