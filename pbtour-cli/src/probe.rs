use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use pbtour_core::proto::person::Person;
use pbtour_core::proto::probe::{Counter, Label};
use pbtour_core::{probe, probe_registered, storage, Candidate, DemoConfig, SchemaRegistry};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
#[command(after_help = "Probing is a guess: a schema that shares wire types with the payload \
                        will also decode it, so the first match is not proof of identity.")]
pub struct Probe {
    #[arg(long, short = 'f', help = "Protobuf input file (defaults to the configured bytes_file)")]
    pub file: Option<PathBuf>,

    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_values = ["counter", "person"],
        help = "Generated types to try, in order"
    )]
    pub order: Vec<KnownType>,

    #[arg(
        long = "schema",
        help = "Registry schema names to try instead of generated types (repeatable)"
    )]
    pub schemas: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KnownType {
    Person,
    Counter,
    Label,
}

impl KnownType {
    fn candidate(self) -> Candidate {
        match self {
            KnownType::Person => Candidate::of::<Person>(),
            KnownType::Counter => Candidate::of::<Counter>(),
            KnownType::Label => Candidate::of::<Label>(),
        }
    }
}

pub fn handle_probe(args: Probe, config: &DemoConfig) -> Result<()> {
    let file = args.file.unwrap_or_else(|| config.bytes_file.clone());
    let data = storage::read_bytes(&file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let outcome = if args.schemas.is_empty() {
        let candidates: Vec<Candidate> = args.order.iter().map(|t| t.candidate()).collect();
        probe(&data, &candidates)
    } else {
        let registry = SchemaRegistry::with_builtin()?;
        let names: Vec<&str> = args.schemas.iter().map(String::as_str).collect();
        probe_registered(&registry, &data, &names)
    };
    info!(file = %file.display(), outcome = ?outcome, "probe finished");

    println!("{}", outcome);
    Ok(())
}
