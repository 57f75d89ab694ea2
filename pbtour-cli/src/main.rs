mod decode;
mod encode;
mod probe;
mod reflect;
mod schemas;
mod settings;
mod shapes;
mod write;

use anyhow::Result;
use clap::{Parser, Subcommand};
use decode::Decode;
use encode::Encode;
use probe::Probe;
use reflect::Reflect;
use settings::Settings;
use tracing_subscriber::EnvFilter;
use write::Write;

#[derive(Debug, Parser)]
#[command(name = "pbtour")]
#[command(about = "A walkthrough of protobuf encoding, probing and dynamic decoding")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    settings: Settings,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Encode the demo person and print the wire bytes")]
    Encode(Encode),

    #[command(about = "Write the demo person as protobuf and JSON files")]
    Write(Write),

    #[command(about = "Read the protobuf file back and decode it")]
    Decode(Decode),

    #[command(about = "Guess the message type of the protobuf file by trial decoding")]
    Probe(Probe),

    #[command(about = "Wrap the person in an event and decode it through the schema registry")]
    Reflect(Reflect),

    #[command(about = "Inspect shapes through their shared area capability")]
    Shapes,

    #[command(about = "List the message schemas known to the registry")]
    Schemas,
}

fn main() -> Result<()> {
    // Demo output goes to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.settings.load()?;

    match cli.command {
        Commands::Encode(encode) => encode::handle_encode(encode, &config)?,
        Commands::Write(write) => write::handle_write(write, &config)?,
        Commands::Decode(decode) => decode::handle_decode(decode, &config)?,
        Commands::Probe(probe) => probe::handle_probe(probe, &config)?,
        Commands::Reflect(reflect) => reflect::handle_reflect(reflect, &config)?,
        Commands::Shapes => shapes::handle_shapes()?,
        Commands::Schemas => schemas::handle_schemas()?,
    }

    Ok(())
}
