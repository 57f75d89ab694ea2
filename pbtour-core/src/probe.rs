//! Speculative type probing.
//!
//! A payload is decoded against each candidate schema in turn and the first
//! schema that decodes without error wins. This is not authoritative: proto3
//! skips unknown fields, so any schema whose declared fields agree on wire
//! type with the payload will accept it.

use std::fmt::{self, Display, Formatter};

use prost::{DecodeError, Message, Name};
use tracing::debug;

use crate::registry::SchemaRegistry;

/// A named decode attempt.
#[derive(Clone)]
pub struct Candidate {
    name: String,
    attempt: fn(&[u8]) -> Result<(), DecodeError>,
}

impl Candidate {
    /// Candidate for a generated message type, named by its full protobuf name.
    pub fn of<M: Message + Name + Default>() -> Self {
        Candidate {
            name: M::full_name(),
            attempt: |data| M::decode(data).map(|_| ()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn accepts(&self, data: &[u8]) -> bool {
        match (self.attempt)(data) {
            Ok(()) => true,
            Err(err) => {
                debug!(target = "probe", candidate = %self.name, error = %err, "candidate rejected payload");
                false
            }
        }
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate").field("name", &self.name).finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Matched(String),
    Unknown,
}

impl ProbeOutcome {
    pub fn matched(&self) -> Option<&str> {
        match self {
            ProbeOutcome::Matched(name) => Some(name),
            ProbeOutcome::Unknown => None,
        }
    }
}

impl Display for ProbeOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Matched(name) => write!(f, "The data represents a {}", name),
            ProbeOutcome::Unknown => f.write_str("The data does not represent a known type"),
        }
    }
}

/// First candidate, in list order, that decodes `data` without error.
pub fn probe(data: &[u8], candidates: &[Candidate]) -> ProbeOutcome {
    candidates
        .iter()
        .find(|candidate| candidate.accepts(data))
        .map_or(ProbeOutcome::Unknown, |candidate| {
            ProbeOutcome::Matched(candidate.name.clone())
        })
}

/// Same rule as [`probe`], with candidates resolved through `registry`.
///
/// Names the registry cannot resolve to a message are skipped.
pub fn probe_registered(registry: &SchemaRegistry, data: &[u8], names: &[&str]) -> ProbeOutcome {
    for name in names {
        match registry.decode_dynamic(name, data) {
            Ok(_) => return ProbeOutcome::Matched(name.to_string()),
            Err(err) => {
                debug!(target = "probe", candidate = %name, error = %err, "candidate rejected payload");
            }
        }
    }
    ProbeOutcome::Unknown
}
