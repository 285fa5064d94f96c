//! @ai:module:intent CLI entry point for the Kotlin structural checker
//! @ai:module:layer presentation
//! @ai:module:public_api main
//! @ai:module:depends_on checker, output

use clap::{Parser, ValueEnum};
use ktcheck::{checker, output, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "ktcheck")]
#[command(author, version, about = "Structural syntax checker for Kotlin source files")]
struct Cli {
    /// Path to a file or directory to check
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    format: Format,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    JsonPretty,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "ktcheck=debug" } else { "ktcheck=warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive)),
        )
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match checker::check_path(&cli.path) {
        Ok(result) => {
            println!("{}", output::format_check_result(&result, cli.format.into()));

            if result.passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
