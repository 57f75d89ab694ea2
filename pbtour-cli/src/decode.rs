use anyhow::{Context, Result};
use clap::Args;
use pbtour_core::proto::person::Person;
use pbtour_core::{storage, DemoConfig};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
pub struct Decode {
    #[arg(long, short = 'f', help = "Protobuf input file (defaults to the configured bytes_file)")]
    pub file: Option<PathBuf>,
}

pub fn handle_decode(decode: Decode, config: &DemoConfig) -> Result<()> {
    let file = decode.file.unwrap_or_else(|| config.bytes_file.clone());

    let person: Person = storage::read_message(&file)
        .with_context(|| format!("failed to decode a Person from {}", file.display()))?;
    info!(file = %file.display(), "decoded person");

    println!("Decoded Person:");
    println!("  name: {}", person.name);
    println!("  id: {}", person.id);
    println!("  email: {}", person.email);
    Ok(())
}
