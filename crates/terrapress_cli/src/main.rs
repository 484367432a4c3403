//! terrapress CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success (including explicit exit from the menu)
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Unknown deployment profile
//! - 4: Cancelled by the user (overwrite declined)

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod generate;
mod menu;
mod output;

use generate::Outcome;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    #[allow(dead_code)] // clap exits with 2 on its own for bad arguments
    pub const INVALID_ARGS: u8 = 2;
    pub const UNKNOWN_PROFILE: u8 = 3;
    pub const CANCELLED: u8 = 4;
}

/// terrapress - Terraform generator for WordPress deployments
#[derive(Parser)]
#[command(name = "terrapress")]
#[command(version, about = "Generate Terraform files for WordPress deployments")]
#[command(long_about = r#"
terrapress assembles Terraform configurations (main.tf, variables.tf,
terraform.tfvars) for WordPress hosting stacks from a catalog of
modular components, driven by a deployment profile and the values in
your .env file.

Without --profile the interactive menu is shown.

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Unknown deployment profile
  4 - Cancelled by the user
"#)]
pub struct Cli {
    /// Path to the .env configuration file
    #[arg(short, long, default_value = ".env")]
    pub env: PathBuf,

    /// Deployment profile to generate (e.g. cost-efficient)
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Output directory (defaults to terraform-<profile>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Run in interactive mode (default when no profile is given)
    #[arg(short, long)]
    pub interactive: bool,
}

fn main() -> ExitCode {
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::from_default_env()
                .add_directive("terrapress=info".parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let cli = Cli::parse();

    let result = if cli.profile.is_some() && !cli.interactive {
        generate::run_direct(&cli)
    } else {
        menu::run(&cli)
    };

    match result {
        Ok(Outcome::Completed) => ExitCode::from(ExitCodes::SUCCESS),
        Ok(Outcome::Cancelled) => {
            println!("Operation cancelled.");
            ExitCode::from(ExitCodes::CANCELLED)
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(categorize_error(&e))
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    if e.downcast_ref::<terrapress_render::RenderError>()
        .map(|err| matches!(err, terrapress_render::RenderError::UnknownProfile(_)))
        .unwrap_or(false)
    {
        ExitCodes::UNKNOWN_PROFILE
    } else {
        ExitCodes::GENERAL_ERROR
    }
}
