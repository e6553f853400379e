//! Flexbridge command-line bootstrap.
//!
//! Maps the platform relationships into framework variables, then either
//! prints them or runs a command with them in its environment.

mod env_file;
mod formatter;

use std::path::PathBuf;
use std::process::Command;

use clap::Parser;
use flexbridge_core::config::DEFAULT_PREFIX;
use flexbridge_core::{map_environment, BridgeConfig, FanOutSink, ProcessSink};
use formatter::OutputFormat;

use env_file::EnvFileSink;

/// Map hosting-platform relationships to framework environment variables
#[derive(Parser, Debug)]
#[command(name = "flexbridge")]
#[command(version, about = "Map hosting-platform relationships to framework environment variables")]
pub struct Args {
    /// Output format when no command is given
    #[arg(long, default_value = "shell", value_enum)]
    pub format: OutputFormat,

    /// Prefix of the platform-provided variables
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// APP_ENV to use when none is set
    #[arg(long)]
    pub app_env: Option<String>,

    /// Also write the variables to this dotenv file
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Command to run with the mapped environment
    #[arg(last = true)]
    pub command: Vec<String>,
}

fn main() {
    // Logs go to stderr; stdout carries the variables.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flexbridge=info,flexbridge_core=info".into()),
        )
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<i32, Box<dyn std::error::Error>> {
    let mut sink = FanOutSink::new().with_store(ProcessSink::new());
    if let Some(path) = &args.env_file {
        sink = sink.with_store(EnvFileSink::new(path));
    }

    let mut config = BridgeConfig::from_sink(&sink).with_prefix(args.prefix.as_str());
    if let Some(app_env) = &args.app_env {
        config = config.with_default_app_env(app_env.as_str());
    }

    let report = map_environment(&mut sink, &config)?;

    let Some((program, program_args)) = args.command.split_first() else {
        let formatter = formatter::create_formatter(args.format);
        let output = formatter.format_report(&report);
        if !output.is_empty() {
            println!("{}", output);
        }
        return Ok(0);
    };

    // Children inherit the variables ProcessSink wrote.
    tracing::info!(program = %program, "running command");
    let status = Command::new(program).args(program_args).status()?;
    Ok(status.code().unwrap_or(1))
}
