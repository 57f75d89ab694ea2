use anyhow::Result;
use clap::Args;
use pbtour_core::{codec, DemoConfig};

use crate::settings::PersonArgs;

#[derive(Debug, Args)]
pub struct Encode {
    #[command(flatten)]
    pub person: PersonArgs,
}

pub fn handle_encode(encode: Encode, config: &DemoConfig) -> Result<()> {
    let person = encode.person.resolve(config);
    let data = codec::encode(&person);

    println!("Encoded Person: {}", codec::format_bytes(&data));
    Ok(())
}
