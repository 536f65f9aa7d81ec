//! Create a `favicon.ico` from an existing image.
//!
//! Usage: favicon-builder <image-path> [output-path]
//! Example: favicon-builder images/logo.png

use clap::error::ErrorKind;
use clap::Parser;
use favicon_builder::IconSizes;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(version, about = "Create a multi-size favicon.ico from a single image", long_about = None)]
struct Cli {
    /// Source image to convert.
    #[arg(allow_hyphen_values = true)]
    input_path: PathBuf,
    /// Where to write the icon.
    #[arg(default_value = "favicon.ico", allow_hyphen_values = true)]
    output_path: PathBuf,
    /// Anything after the output path is ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<OsString>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return argument_error(error),
    };

    if !cli.input_path.exists() {
        println!("✗ File not found: {}", cli.input_path.display());
        return ExitCode::FAILURE;
    }

    // Only usage and missing-input errors set a failing exit status. A failed
    // build has already been reported on stdout and still exits 0.
    let built = create_favicon(&cli.input_path, &cli.output_path);
    debug!(built, "finished");
    ExitCode::SUCCESS
}

/// Builds the favicon and prints the outcome. Returns whether it was written.
fn create_favicon(input_path: &Path, output_path: &Path) -> bool {
    match favicon_builder::build(input_path, output_path, IconSizes::FAVICON) {
        Ok(()) => {
            println!("✓ Created favicon: {}", output_path.display());
            true
        }
        Err(error) => {
            println!("✗ Error: {error}");
            false
        }
    }
}

fn argument_error(error: clap::Error) -> ExitCode {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = error.print();
            ExitCode::SUCCESS
        }
        ErrorKind::MissingRequiredArgument
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            println!("Usage: favicon-builder <image-path> [output-path]");
            println!("Example: favicon-builder images/logo.png");
            ExitCode::FAILURE
        }
        _ => {
            let _ = error.print();
            ExitCode::FAILURE
        }
    }
}
