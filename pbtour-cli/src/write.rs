use anyhow::{Context, Result};
use clap::Args;
use pbtour_core::{storage, DemoConfig};
use std::path::PathBuf;

use crate::settings::PersonArgs;

#[derive(Debug, Args)]
pub struct Write {
    #[command(flatten)]
    pub person: PersonArgs,

    #[arg(long, help = "Protobuf output file (defaults to the configured bytes_file)")]
    pub bytes_file: Option<PathBuf>,

    #[arg(long, help = "JSON output file (defaults to the configured json_file)")]
    pub json_file: Option<PathBuf>,
}

pub fn handle_write(write: Write, config: &DemoConfig) -> Result<()> {
    let person = write.person.resolve(config);
    let bytes_file = write.bytes_file.unwrap_or_else(|| config.bytes_file.clone());
    let json_file = write.json_file.unwrap_or_else(|| config.json_file.clone());

    let len = storage::write_message(&bytes_file, &person)
        .with_context(|| format!("failed to write {}", bytes_file.display()))?;
    println!(
        "Proto data written to {} file successfully. len {}",
        bytes_file.display(),
        len
    );

    let len = storage::write_json(&json_file, &person)
        .with_context(|| format!("failed to write {}", json_file.display()))?;
    println!(
        "Json data written to {} file successfully. len {}",
        json_file.display(),
        len
    );

    Ok(())
}
