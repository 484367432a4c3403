//! One generation run: assemble, prepare the directory, write.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use terrapress_config::{ConfigSet, EnvParser};
use terrapress_render::DocumentAssembler;

use crate::output::{self, DirectoryStatus};
use crate::Cli;

/// How a generation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The user declined the directory overwrite.
    Cancelled,
}

/// Non-interactive entry: `--profile` was given on the command line.
pub fn run_direct(cli: &Cli) -> Result<Outcome> {
    let config = EnvParser::new(&cli.env)
        .parse()
        .context("Failed to read configuration")?;

    // Presence is checked by the caller.
    let profile = cli.profile.as_deref().unwrap_or_default();
    generate(profile, &config, cli.output.clone())
}

/// Generate the Terraform files for one deployment profile.
///
/// Documents are assembled before any directory is touched, so a fatal
/// error (unknown profile) leaves the filesystem untouched and a
/// declined overwrite means no partial writes.
pub fn generate(
    profile: &str,
    config: &ConfigSet,
    directory: Option<PathBuf>,
) -> Result<Outcome> {
    info!("Generating deployment profile '{}'", profile);

    let assembler = DocumentAssembler::new();
    let deployment = assembler.assemble(profile, config)?;

    for warning in &deployment.warnings {
        println!("Warning: {}", warning);
    }

    let directory = directory.unwrap_or_else(|| PathBuf::from(format!("terraform-{}", profile)));
    match output::prepare_directory(&directory)? {
        DirectoryStatus::Ready => {}
        DirectoryStatus::Declined => return Ok(Outcome::Cancelled),
    }

    output::write_documents(&deployment.documents, &directory)?;

    println!();
    println!(
        "Terraform files for the '{}' deployment generated successfully!",
        profile
    );
    println!();
    println!("To deploy:");
    println!("1. Navigate to the '{}' directory", directory.display());
    println!("2. Run 'terraform init'");
    println!("3. Run 'terraform apply'");

    Ok(Outcome::Completed)
}
