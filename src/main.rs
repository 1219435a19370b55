mod activity;
mod app;
mod audio;
mod cli;
mod clock;
mod config;
mod notify;
mod render;

use crate::app::AppController;
use crate::cli::shell::run_shell;
use crate::cli::{Cli, Commands, ConfigCommands};
use crate::config::Config;
use crate::render::ViewOptions;
use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::{Input, theme::ColorfulTheme};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { name } => handle_run(name).await,
        Commands::Config { command } => handle_config_command(command),
    }
}

fn handle_config_command(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set_value(&key, &value)?;
            config.save()?;

            println!("Config saved: {key} = {value}");
            Ok(())
        }
        ConfigCommands::Get { key } => {
            let config = Config::load_or_default();
            let value = config
                .get_value(&key)
                .with_context(|| format!("Unsupported config key: {key}"))?;

            println!("{value}");
            Ok(())
        }
    }
}

async fn handle_run(name: Option<String>) -> Result<()> {
    let config = Config::load_or_default();
    let options = ViewOptions::from(&config);
    let mut controller = AppController::new(&config, audio::sink_for(&config));

    info!(school = %config.school_name, "session started");

    let name = name
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .or_else(|| {
            prompt_student_name(&config)
                .map_err(|error| {
                    warn!(error = %error, "name prompt unavailable, waiting for `login <name>`");
                    error
                })
                .ok()
        });

    if let Some(name) = name {
        controller.login(&name);
    }

    run_shell(&mut controller, &options).await
}

fn prompt_student_name(config: &Config) -> Result<String> {
    println!("──────────────────────────────────────────");
    println!("  Welcome to {}!", config.school_name);
    println!("──────────────────────────────────────────");

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("  What is your name?")
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.trim().is_empty() {
                Err("Please enter your name")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .context("Failed to read student name")?;

    Ok(name.trim().to_string())
}
