//! CLI Adapter.

mod settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::api;
use crate::domain::{AppError, RelocationDecision};

#[derive(Parser)]
#[command(name = "divat")]
#[command(version)]
#[command(
    about = "Move attachments pasted into public notes into the public attachments folder",
    long_about = None
)]
struct Cli {
    /// Vault root (defaults to the current directory)
    #[arg(long, global = true)]
    vault: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch the vault and relocate attachments as they are created
    #[clap(visible_alias = "w")]
    Watch {
        /// Treat this note as the active document instead of reading the editor session
        #[arg(short, long)]
        active: Option<String>,
    },
    /// Run the relocation rules once for a file, as if it had just been created
    #[clap(visible_alias = "r")]
    Relocate {
        /// File path (vault-relative or absolute)
        path: PathBuf,
        /// Treat this note as the active document instead of reading the editor session
        #[arg(short, long)]
        active: Option<String>,
    },
    /// Show or change relocation settings
    #[clap(visible_alias = "s")]
    Settings {
        #[command(subcommand)]
        command: Option<settings::SettingsCommands>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result = vault_root(cli.vault).and_then(|root| match cli.command {
        Commands::Watch { active } => run_watch(root, active).map(|_| 0),
        Commands::Relocate { path, active } => run_relocate(root, path, active),
        Commands::Settings { command } => settings::run_settings(root, command).map(|_| 0),
    });

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "divat=info".into());
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn vault_root(vault: Option<PathBuf>) -> Result<PathBuf, AppError> {
    let root = match vault {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    if !root.is_dir() {
        return Err(AppError::config_error(format!("Vault '{}' is not a directory", root.display())));
    }
    Ok(root)
}

fn run_watch(root: PathBuf, active: Option<String>) -> Result<(), AppError> {
    println!("👀 Watching {} (Ctrl-C to stop)", root.display());
    let summary = api::watch_at(root, active.as_deref())?;
    println!(
        "✅ Stopped watching: {} moved, {} failed, {} ignored",
        summary.moved, summary.failed, summary.ignored
    );
    Ok(())
}

fn run_relocate(root: PathBuf, path: PathBuf, active: Option<String>) -> Result<i32, AppError> {
    let report = api::relocate_at(root, &path, active.as_deref())?;
    match report.decision {
        RelocationDecision::Ignore => {
            println!("No relocation rule applies to {}", path.display());
            Ok(0)
        }
        RelocationDecision::Move(_) => Ok(if report.failed() { 1 } else { 0 }),
    }
}
