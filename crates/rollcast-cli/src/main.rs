mod args;

use std::any::Any;
use std::io::{self, Write};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rollcast_core::{ConfigError, RunConfig};
use rollcast_generate::{GenerateError, RollEngine, RollReport};

use args::Cli;

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Generate(#[from] GenerateError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Validation failures carry their own documented codes; everything
    /// else is a recognized runtime error.
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(err) => err.exit_code(),
            CliError::Generate(_) | CliError::Io(_) => 1,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(err),
    };

    init_tracing();

    match catch_unwind(AssertUnwindSafe(|| run(cli))) {
        Ok(Ok(_report)) => ExitCode::SUCCESS,
        Ok(Err(err)) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
        Err(panic) => {
            eprintln!("error: {}", panic_message(panic));
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<RollReport, CliError> {
    let config = RunConfig::resolve(cli.into_options())?;
    let engine = RollEngine::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = engine.run(&mut out)?;
    out.flush()?;
    Ok(report)
}

/// Help and version requests exit clean; anything else clap rejected is
/// a recognized error.
fn handle_parse_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            let _ = err.print();
            ExitCode::from(1)
        }
    }
}

/// Values print to stdout, so logs go to stderr; silent unless RUST_LOG
/// asks for more.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic during generation".to_string()
    }
}
