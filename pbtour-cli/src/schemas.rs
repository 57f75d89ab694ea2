use anyhow::Result;
use pbtour_core::SchemaRegistry;

pub fn handle_schemas() -> Result<()> {
    let registry = SchemaRegistry::with_builtin()?;
    for name in registry.schema_names() {
        println!("{}", name);
    }
    Ok(())
}
