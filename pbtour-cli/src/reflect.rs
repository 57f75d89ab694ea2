use anyhow::{Context, Result};
use clap::Args;
use pbtour_core::envelope::{self, AttributesReader, Event};
use pbtour_core::{storage, DemoConfig, SchemaRegistry};
use std::path::PathBuf;
use tracing::info;

use crate::settings::PersonArgs;

#[derive(Debug, Args)]
pub struct Reflect {
    #[command(flatten)]
    pub person: PersonArgs,

    #[arg(long, help = "Also write the event as CloudEvents JSON to the configured event_file")]
    pub save: bool,

    #[arg(long, help = "Write the event JSON to this path instead (implies --save)")]
    pub out: Option<PathBuf>,

    #[arg(
        long,
        conflicts_with_all = ["save", "out", "name", "id", "email"],
        help = "Decode an existing event JSON file instead of building one"
    )]
    pub event: Option<PathBuf>,
}

pub fn handle_reflect(args: Reflect, config: &DemoConfig) -> Result<()> {
    let registry = SchemaRegistry::with_builtin()?;

    let event = match &args.event {
        Some(path) => storage::read_json::<Event>(path)
            .with_context(|| format!("failed to read event from {}", path.display()))?,
        None => {
            let person = args.person.resolve(config);
            envelope::wrap(&config.event_source, &person)?
        }
    };

    let out = match args.out {
        Some(path) => Some(path),
        None if args.save => Some(config.event_file.clone()),
        None => None,
    };
    if let Some(path) = out {
        storage::write_bytes(&path, &envelope::to_json(&event)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Event written to {}", path.display());
    }

    let record = envelope::unwrap_dynamic(&event, &registry)
        .with_context(|| format!("failed to decode event {}", event.id()))?;
    info!(event_id = %event.id(), schema = %record.schema_name(), "event decoded");

    for line in record.render() {
        println!("{}", line);
    }
    Ok(())
}
