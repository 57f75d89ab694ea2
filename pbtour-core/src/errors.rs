use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PbTourError>;

#[derive(Debug, Error)]
pub enum PbTourError {
    #[error("unable to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("invalid descriptor: {0}")]
    Descriptor(#[from] prost_reflect::DescriptorError),

    #[error("schema not found in registry: {0}")]
    SchemaNotFound(String),

    #[error("schema {0} is not a message")]
    NotARecord(String),

    #[error("unable to build event: {0}")]
    EventBuild(#[from] cloudevents::event::EventBuilderError),

    #[error("event has no dataschema attribute")]
    MissingDataSchema,

    #[error("event carries no data")]
    MissingEventData,

    #[error("event data is not binary")]
    NonBinaryEventData,
}

impl PbTourError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PbTourError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for registry misses, as opposed to failures while decoding the payload.
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            PbTourError::SchemaNotFound(_) | PbTourError::NotARecord(_)
        )
    }

    pub fn extract_decode(&self) -> Option<&prost::DecodeError> {
        match self {
            PbTourError::Decode(err) => Some(err),
            _ => None,
        }
    }
}
