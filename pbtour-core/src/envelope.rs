//! CloudEvents envelope carrying a protobuf payload plus a reference to the
//! schema needed to read it.
//!
//! The schema reference travels in `dataschema` as `proto:<full name>`.
//! Any other URL is read by its last path segment, so
//! `https://type.googleapis.com/example.person.Person` resolves too.

use cloudevents::{Data, EventBuilder, EventBuilderV10};
use prost::{Message, Name};
use tracing::debug;
use uuid::Uuid;

use crate::codec;
use crate::errors::{PbTourError, Result};
use crate::registry::{DynamicRecord, SchemaRegistry};

pub use cloudevents::{AttributesReader, Event};

pub const CONTENT_TYPE_PROTOBUF: &str = "application/protobuf";
pub const SCHEMA_SCHEME: &str = "proto";

pub fn schema_url(full_name: &str) -> String {
    format!("{}:{}", SCHEMA_SCHEME, full_name)
}

/// Encode `message` into a new event tagged with the message's schema name.
pub fn wrap<M: Message + Name>(source: &str, message: &M) -> Result<Event> {
    let schema = M::full_name();
    let event = EventBuilderV10::new()
        .id(Uuid::new_v4().to_string())
        .source(source)
        .ty(format!("pbtour.{}", schema))
        .data_with_schema(
            CONTENT_TYPE_PROTOBUF,
            schema_url(&schema).as_str(),
            codec::encode(message),
        )
        .build()?;
    Ok(event)
}

/// Schema name carried by `dataschema`, if any.
pub fn schema_name(event: &Event) -> Option<String> {
    let url = event.dataschema()?;
    let name = if url.scheme() == SCHEMA_SCHEME {
        url.path()
    } else {
        url.path_segments()?.last()?
    };
    (!name.is_empty()).then(|| name.to_string())
}

/// Binary payload of `event`; text and JSON data are not protobuf.
pub fn payload(event: &Event) -> Result<&[u8]> {
    match event.data() {
        Some(Data::Binary(data)) => Ok(data.as_slice()),
        Some(_) => Err(PbTourError::NonBinaryEventData),
        None => Err(PbTourError::MissingEventData),
    }
}

/// Decode the payload using the schema named by `dataschema`.
pub fn unwrap_dynamic(event: &Event, registry: &SchemaRegistry) -> Result<DynamicRecord> {
    let schema = schema_name(event).ok_or(PbTourError::MissingDataSchema)?;
    let data = payload(event)?;
    debug!(target = "envelope", id = %event.id(), schema = %schema, "unwrapping event");
    registry.decode_dynamic(&schema, data)
}

/// Structured-mode JSON, binary data carried as `data_base64`.
pub fn to_json(event: &Event) -> Result<Vec<u8>> {
    codec::to_json(event)
}

pub fn from_json(data: &[u8]) -> Result<Event> {
    codec::from_json(data)
}
