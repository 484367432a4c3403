//! Interactive mode: the numbered deployment menu.

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::Term;
use dialoguer::Input;

use terrapress_catalog::ProfileCatalog;
use terrapress_config::{ConfigSet, EnvParser};

use crate::generate::{self, Outcome};
use crate::Cli;

/// Run the interactive menu loop until the user exits.
pub fn run(cli: &Cli) -> Result<Outcome> {
    let config = EnvParser::new(&cli.env)
        .parse()
        .context("Failed to read configuration")?;
    let profiles = ProfileCatalog::builtin();

    loop {
        display_menu(&profiles);
        show_config_summary(&config);

        let choice = prompt_choice(profiles.len())?;
        if choice == 0 {
            println!("\nExiting. Goodbye!");
            return Ok(Outcome::Completed);
        }

        // Menu numbers follow catalog declaration order, starting at 1.
        let profile = profiles
            .iter()
            .nth(choice - 1)
            .expect("choice validated against catalog length");

        let default_dir = format!("terraform-{}", profile.name);
        let directory: String = Input::new()
            .with_prompt("Enter directory name for the Terraform files")
            .default(default_dir)
            .interact_text()
            .context("Failed to read directory name")?;

        match generate::generate(profile.name, &config, Some(PathBuf::from(directory))) {
            Ok(Outcome::Completed) => {}
            Ok(Outcome::Cancelled) => println!("Operation cancelled."),
            Err(e) => eprintln!("Error: {:#}", e),
        }

        pause()?;
    }
}

fn display_menu(profiles: &ProfileCatalog) {
    let term = Term::stdout();
    term.clear_screen().ok();

    println!("{}", "=".repeat(60));
    println!("            WORDPRESS TERRAFORM GENERATOR");
    println!("{}", "=".repeat(60));
    println!("\nSelect the type of deployment you want to generate:");

    for (index, profile) in profiles.iter().enumerate() {
        println!("\n{}. {}", index + 1, profile.description);
    }

    println!("\n0. Exit");
    println!("\n{}", "=".repeat(60));
}

fn show_config_summary(config: &ConfigSet) {
    println!("\nConfiguration Summary:");
    println!("{}", "=".repeat(60));
    println!("AWS Region: {}", config.render("aws_region"));
    println!("Project Name: {}", config.render("project_name"));
    println!("WordPress Domain: {}", config.render("wordpress_domain"));
    println!("Instance Type: {}", config.render("instance_type"));

    if config.is_enabled("use_rds") {
        println!("RDS: Enabled ({})", config.render("rds_instance_class"));
    }
    if config.is_enabled("enable_auto_scaling") {
        println!(
            "Auto Scaling: Enabled ({}-{} instances)",
            config.render("min_instances"),
            config.render("max_instances")
        );
    }
    if config.is_enabled("enable_s3_media") {
        println!("S3 Media Storage: Enabled");
    }

    println!("{}", "=".repeat(60));
    println!();
}

/// Prompt for a menu number until a valid one is entered.
fn prompt_choice(max: usize) -> Result<usize> {
    loop {
        let raw: String = Input::new()
            .with_prompt(format!("Enter your choice [0-{}]", max))
            .interact_text()
            .context("Failed to read menu choice")?;

        match raw.trim().parse::<usize>() {
            Ok(choice) if choice <= max => return Ok(choice),
            Ok(_) => println!(
                "Invalid choice. Please enter a number between 0 and {}.",
                max
            ),
            Err(_) => println!("Invalid input. Please enter a number."),
        }
    }
}

fn pause() -> Result<()> {
    let _: String = Input::new()
        .with_prompt("\nPress Enter to return to the main menu")
        .allow_empty(true)
        .interact_text()
        .context("Failed to read input")?;
    Ok(())
}
