use std::io::ErrorKind;
use std::path::PathBuf;

use clap::Subcommand;
use dialoguer::{Error as DialoguerError, Input};

use crate::app::api;
use crate::domain::policy::default_attachment_folder;
use crate::domain::{AppError, PolicyConfiguration, PolicyUpdate, normalize_vault_path};

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Print the current settings
    Show,
    /// Change settings non-interactively
    Set {
        /// Folder holding public notes; also resets the attachment folder to `<value>/attachments`
        #[arg(short = 'p', long)]
        public_folder: Option<String>,
        /// Folder public attachments are moved into
        #[arg(short = 'a', long)]
        public_attachment_folder: Option<String>,
    },
    /// Change settings interactively
    Edit,
}

pub fn run_settings(root: PathBuf, command: Option<SettingsCommands>) -> Result<(), AppError> {
    match command.unwrap_or(SettingsCommands::Show) {
        SettingsCommands::Show => {
            print_settings(&api::settings_show_at(root)?);
        }
        SettingsCommands::Set { public_folder, public_attachment_folder } => {
            let update = PolicyUpdate { public_folder, public_attachment_folder };
            if update.is_empty() {
                return Err(AppError::config_error(
                    "Nothing to change. Pass --public-folder and/or --public-attachment-folder.",
                ));
            }
            let config = api::settings_update_at(root, &update)?;
            println!("✅ Settings saved");
            print_settings(&config);
        }
        SettingsCommands::Edit => {
            let current = api::settings_show_at(root.clone())?;
            let Some(update) = prompt_update(&current)? else {
                println!("Cancelled");
                return Ok(());
            };
            let config = api::settings_update_at(root, &update)?;
            println!("✅ Settings saved");
            print_settings(&config);
        }
    }
    Ok(())
}

fn print_settings(config: &PolicyConfiguration) {
    println!("public_folder            = {}", config.public_folder);
    println!("public_attachment_folder = {}", config.public_attachment_folder);
}

/// Ask for both folders; the attachment prompt defaults to the derived folder
/// when the public folder changed.
fn prompt_update(current: &PolicyConfiguration) -> Result<Option<PolicyUpdate>, AppError> {
    let Some(public_folder) = prompt_text(
        "Public folder (holds notes to publish)",
        &current.public_folder,
    )?
    else {
        return Ok(None);
    };

    let public_changed = normalize_vault_path(&public_folder) != current.public_folder;
    let suggested = if public_changed {
        default_attachment_folder(&public_folder)
    } else {
        current.public_attachment_folder.clone()
    };

    let Some(attachment_folder) = prompt_text(
        "Public attachment folder (e.g. public/attachments or assets/images)",
        &suggested,
    )?
    else {
        return Ok(None);
    };

    let attachment_changed = normalize_vault_path(&attachment_folder) != suggested;

    Ok(Some(PolicyUpdate {
        public_folder: public_changed.then_some(public_folder),
        public_attachment_folder: attachment_changed.then_some(attachment_folder),
    }))
}

fn prompt_text(prompt: &str, default: &str) -> Result<Option<String>, AppError> {
    match Input::<String>::new().with_prompt(prompt).default(default.to_string()).interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::config_error(format!("Failed to read input: {}", err))),
    }
}
