//! Building blocks for the pbtour demos: generated protobuf types, file
//! persistence, speculative probing, registry-driven dynamic decoding and a
//! CloudEvents envelope.

pub mod codec;
pub mod config;
pub mod envelope;
pub mod errors;
pub mod probe;
pub mod registry;
pub mod shapes;
pub mod storage;

// Generated by build.rs from proto/*.proto
pub mod proto {
    /// Encoded `FileDescriptorSet` for every compiled-in proto file.
    pub const FILE_DESCRIPTOR_SET: &[u8] =
        include_bytes!(concat!(env!("OUT_DIR"), "/file_descriptor_set.bin"));

    pub mod person {
        include!("proto/example.person.rs");
    }

    pub mod probe {
        include!("proto/example.probe.rs");
    }
}

pub use config::DemoConfig;
pub use envelope::Event;
pub use errors::{PbTourError, Result};
pub use probe::{probe, probe_registered, Candidate, ProbeOutcome};
pub use registry::{DynamicRecord, FieldValue, SchemaRegistry};
pub use shapes::Shape;
