//! Console command definitions and dispatch.

pub mod audit;
pub mod demo;
pub mod templates;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use dinehub_core::config::AppConfig;
use dinehub_core::error::AppError;

/// DineHub: restaurant console notification center
#[derive(Debug, Parser)]
#[command(name = "dinehub-console", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (extension optional)
    #[arg(short, long, env = "DINEHUB_CONFIG", default_value = "config/default")]
    pub config: String,

    /// Environment overlay loaded from `config/{env}`
    #[arg(long, env = "DINEHUB_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play a role's sample notifications into the bell menu
    Demo(demo::DemoArgs),
    /// Show the admin notification view derived from an audit log file
    Audit(audit::AuditArgs),
    /// List the notification template catalog
    Templates,
}

impl Cli {
    /// Execute the selected command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Demo(args) => demo::execute(args, config, self.format).await,
            Commands::Audit(args) => audit::execute(args, config, self.format),
            Commands::Templates => templates::execute(self.format),
        }
    }
}
