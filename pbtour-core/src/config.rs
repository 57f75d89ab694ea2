use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{PbTourError, Result};
use crate::proto::person::Person;

/// Environment variable naming a config file when none is given explicitly.
pub const CONFIG_ENV: &str = "PBTOUR_CONFIG";

/// configuration for the demo programs, every key optional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// binary wire-format file
    pub bytes_file: PathBuf,
    /// JSON rendition of the same record
    pub json_file: PathBuf,
    /// event envelope written by the reflective decode demo
    pub event_file: PathBuf,
    /// source attribute stamped on events
    pub event_source: String,
    pub person: PersonConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            bytes_file: PathBuf::from("person.bytes"),
            json_file: PathBuf::from("person.json"),
            event_file: PathBuf::from("person.event.json"),
            event_source: "/pbtour/demo".to_string(),
            person: PersonConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonConfig {
    pub name: String,
    pub id: i32,
    pub email: String,
}

impl Default for PersonConfig {
    fn default() -> Self {
        PersonConfig {
            name: "James".to_string(),
            id: 1,
            email: "james.lewis2@anz.com".to_string(),
        }
    }
}

impl From<&PersonConfig> for Person {
    fn from(cfg: &PersonConfig) -> Self {
        Person {
            name: cfg.name.clone(),
            id: cfg.id,
            email: cfg.email.clone(),
        }
    }
}

impl DemoConfig {
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PbTourError::io(path, e))?;
        let config = Self::from_yaml(&content)?;
        info!(target = "config", path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load `explicit` if given, else the file named by `PBTOUR_CONFIG`, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Re-root relative file paths under `dir`.
    pub fn rooted_at(mut self, dir: &Path) -> Self {
        for file in [&mut self.bytes_file, &mut self.json_file, &mut self.event_file] {
            if file.is_relative() {
                *file = dir.join(&*file);
            }
        }
        self
    }

    pub fn person(&self) -> Person {
        Person::from(&self.person)
    }
}
