pub mod shell;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "happymind", about = "School wellness companion for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Start an interactive session")]
    Run {
        #[arg(long, help = "Log in straight away instead of being asked for a name")]
        name: Option<String>,
    },
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    Set { key: String, value: String },
    Get { key: String },
}
