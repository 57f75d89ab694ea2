use prost::Message;
use std::error::Error;
use std::path::{Path, PathBuf};

const PROTOS: &[&str] = &["person.proto", "probe.proto"];

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = Path::new("src/proto");
    let descriptor_path = PathBuf::from(std::env::var("OUT_DIR")?).join("file_descriptor_set.bin");

    println!("cargo:rerun-if-changed=proto");

    // protox compiles in-process, no protoc binary required
    let file_descriptors = protox::compile(PROTOS, ["proto"])?;
    std::fs::write(&descriptor_path, file_descriptors.encode_to_vec())?;

    prost_build::Config::new()
        .out_dir(out_dir)
        .enable_type_names()
        .type_attribute(
            ".example.person.Person",
            "#[derive(serde::Serialize, serde::Deserialize)]",
        )
        .type_attribute(".example.person.Person", "#[serde(default)]")
        .field_attribute(
            ".example.person.Person.name",
            "#[serde(skip_serializing_if = \"String::is_empty\")]",
        )
        .field_attribute(
            ".example.person.Person.id",
            "#[serde(skip_serializing_if = \"crate::codec::is_zero\")]",
        )
        .field_attribute(
            ".example.person.Person.email",
            "#[serde(skip_serializing_if = \"String::is_empty\")]",
        )
        .compile_fds(file_descriptors)?;

    Ok(())
}
