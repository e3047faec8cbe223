//! odmwatch - lifecycle controller for the odmwatchd daemon
//!
//! Starts the imagery-processing worker detached from the invoking session,
//! records its PID, and delivers a graceful termination request on stop.

use clap::{Parser, Subcommand};
use odmwatch_core::{
    error::{OdmwatchError, StartError, StopError},
    init_logging,
};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "odmwatch")]
#[command(about = "Start and stop the odmwatchd imagery-processing daemon")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the worker daemon in the background
    Start {
        /// Configuration file handed to the worker unmodified
        #[arg(long, value_name = "FILE")]
        config: Option<String>,

        /// Worker executable name or path
        #[arg(long, value_name = "PROGRAM", default_value = odmwatch_core::worker::DEFAULT_WORKER)]
        worker: String,

        /// PID file location
        #[arg(long, value_name = "FILE")]
        pid_file: Option<PathBuf>,
    },
    /// Stop the running worker daemon
    Stop {
        /// PID file location
        #[arg(long, value_name = "FILE")]
        pid_file: Option<PathBuf>,
    },
    /// Show whether the worker daemon is running
    Status {
        /// PID file location
        #[arg(long, value_name = "FILE")]
        pid_file: Option<PathBuf>,
    },
}

fn main() {
    // Initialize logging
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(2);
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Start {
            config,
            worker,
            pid_file,
        } => cli::start::run_start(config.as_deref(), &worker, pid_file),
        Commands::Stop { pid_file } => cli::stop::run_stop(pid_file),
        Commands::Status { pid_file } => cli::status::run_status(pid_file),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            let exit_code = match e {
                // Usage and corrupt-state errors (exit code 2)
                OdmwatchError::Start(StartError::MissingArgument) => 2,
                OdmwatchError::Stop(StopError::CorruptHandle { .. }) => 2,
                // Runtime errors (exit code 1). HandleNotFound is benign
                // for the core but an error exit by tooling convention.
                OdmwatchError::Start(_) | OdmwatchError::Stop(_) => 1,
                OdmwatchError::Io(_) => 1,
            };

            eprintln!("{}", e);
            std::process::exit(exit_code);
        }
    }
}
