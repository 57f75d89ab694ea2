use anyhow::{Context, Result};
use clap::Args;
use pbtour_core::proto::person::Person;
use pbtour_core::DemoConfig;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct Settings {
    #[arg(
        long,
        short = 'c',
        global = true,
        help = "Path to a YAML config file (falls back to $PBTOUR_CONFIG)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        short = 'd',
        global = true,
        help = "Directory the demo files are read from and written to"
    )]
    pub dir: Option<PathBuf>,
}

impl Settings {
    pub fn load(&self) -> Result<DemoConfig> {
        let config = DemoConfig::resolve(self.config.as_deref())
            .context("failed to load pbtour configuration")?;

        Ok(match &self.dir {
            Some(dir) => config.rooted_at(dir),
            None => config,
        })
    }
}

/// Per-command overrides of the configured person.
#[derive(Debug, Args)]
pub struct PersonArgs {
    #[arg(long, help = "Person name (defaults to the configured person)")]
    pub name: Option<String>,

    #[arg(long, allow_negative_numbers = true, help = "Person id")]
    pub id: Option<i32>,

    #[arg(long, help = "Person email")]
    pub email: Option<String>,
}

impl PersonArgs {
    pub fn resolve(&self, config: &DemoConfig) -> Person {
        let mut person = config.person();
        if let Some(name) = &self.name {
            person.name = name.clone();
        }
        if let Some(id) = self.id {
            person.id = id;
        }
        if let Some(email) = &self.email {
            person.email = email.clone();
        }
        person
    }
}
