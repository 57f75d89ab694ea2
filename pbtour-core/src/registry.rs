use std::fmt::{self, Display, Formatter};

use prost_reflect::{
    DescriptorPool, DynamicMessage, MapKey, MessageDescriptor, ReflectMessage, Value,
};
use prost_types::FileDescriptorProto;
use tracing::{debug, info};

use crate::errors::{PbTourError, Result};

/// Lookup table from fully-qualified schema name to its descriptor.
///
/// Built by the caller and passed by reference to whatever needs a lookup;
/// there is no process-wide instance.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    pool: DescriptorPool,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every schema compiled into this crate.
    pub fn with_builtin() -> Result<Self> {
        let pool = DescriptorPool::decode(crate::proto::FILE_DESCRIPTOR_SET)?;
        info!(target = "registry", files = pool.files().count(), "loaded builtin schemas");
        Ok(Self { pool })
    }

    pub fn register_file(&mut self, file: FileDescriptorProto) -> Result<()> {
        let file_name = file.name().to_string();
        self.pool.add_file_descriptor_proto(file)?;
        info!(target = "registry", file = %file_name, "registered schema file");
        Ok(())
    }

    /// Fully-qualified names of every registered message schema.
    pub fn schema_names(&self) -> Vec<String> {
        self.pool
            .all_messages()
            .map(|desc| desc.full_name().to_string())
            .collect()
    }

    /// Resolve `name` to a message descriptor.
    ///
    /// Names that resolve to an enum, service, extension or package are
    /// reported as [`PbTourError::NotARecord`]; anything else unknown is
    /// [`PbTourError::SchemaNotFound`].
    pub fn lookup(&self, name: &str) -> Result<MessageDescriptor> {
        if let Some(desc) = self.pool.get_message_by_name(name) {
            return Ok(desc);
        }

        let other_kind = self.pool.get_enum_by_name(name).is_some()
            || self.pool.get_service_by_name(name).is_some()
            || self.pool.get_extension_by_name(name).is_some()
            || self.pool.files().any(|file| file.package_name() == name);

        if other_kind {
            Err(PbTourError::NotARecord(name.to_string()))
        } else {
            Err(PbTourError::SchemaNotFound(name.to_string()))
        }
    }

    /// Decode `data` into a generic record whose layout is taken from `name`.
    ///
    /// The lookup happens before any byte is read, so an unknown name is a
    /// lookup error even when `data` is garbage.
    pub fn decode_dynamic(&self, name: &str, data: &[u8]) -> Result<DynamicRecord> {
        let desc = self.lookup(name)?;
        let message = DynamicMessage::decode(desc, data)?;
        debug!(target = "registry", schema = %name, len = data.len(), "dynamic decode");
        Ok(DynamicRecord { message })
    }
}

/// A record decoded against a runtime descriptor.
#[derive(Debug, Clone)]
pub struct DynamicRecord {
    message: DynamicMessage,
}

impl DynamicRecord {
    pub fn schema_name(&self) -> String {
        self.message.descriptor().full_name().to_string()
    }

    /// Present fields as `(name, value)` pairs in declaration order.
    pub fn fields(&self) -> Vec<(String, FieldValue)> {
        present_fields(&self.message)
    }

    pub fn get(&self, name: &str) -> Option<FieldValue> {
        let field = self.message.descriptor().get_field_by_name(name)?;
        if !self.message.has_field(&field) {
            return None;
        }
        Some(FieldValue::from(self.message.get_field(&field).as_ref()))
    }

    /// One `Field: <name>, Value: <value>` line per present field.
    pub fn render(&self) -> Vec<String> {
        self.fields()
            .into_iter()
            .map(|(name, value)| format!("Field: {}, Value: {}", name, value))
            .collect()
    }

    pub fn as_message(&self) -> &DynamicMessage {
        &self.message
    }
}

fn present_fields(message: &DynamicMessage) -> Vec<(String, FieldValue)> {
    message
        .descriptor()
        .fields()
        .filter(|field| message.has_field(field))
        .map(|field| {
            let value = FieldValue::from(message.get_field(&field).as_ref());
            (field.name().to_string(), value)
        })
        .collect()
}

/// Display-oriented projection of a dynamic field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Enum(i32),
    Message(Vec<(String, FieldValue)>),
    List(Vec<FieldValue>),
    // sorted by key
    Map(Vec<(String, FieldValue)>),
}

impl From<&Value> for FieldValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(v) => FieldValue::Bool(*v),
            Value::I32(v) => FieldValue::Int(i64::from(*v)),
            Value::I64(v) => FieldValue::Int(*v),
            Value::U32(v) => FieldValue::UInt(u64::from(*v)),
            Value::U64(v) => FieldValue::UInt(*v),
            Value::F32(v) => FieldValue::Float(f64::from(*v)),
            Value::F64(v) => FieldValue::Float(*v),
            Value::String(v) => FieldValue::Text(v.clone()),
            Value::Bytes(v) => FieldValue::Bytes(v.to_vec()),
            Value::EnumNumber(v) => FieldValue::Enum(*v),
            Value::Message(v) => FieldValue::Message(present_fields(v)),
            Value::List(items) => FieldValue::List(items.iter().map(FieldValue::from).collect()),
            Value::Map(entries) => {
                let mut pairs: Vec<(String, FieldValue)> = entries
                    .iter()
                    .map(|(key, value)| (map_key_string(key), FieldValue::from(value)))
                    .collect();
                pairs.sort_by(|a, b| a.0.cmp(&b.0));
                FieldValue::Map(pairs)
            }
        }
    }
}

fn map_key_string(key: &MapKey) -> String {
    match key {
        MapKey::Bool(v) => v.to_string(),
        MapKey::I32(v) => v.to_string(),
        MapKey::I64(v) => v.to_string(),
        MapKey::U32(v) => v.to_string(),
        MapKey::U64(v) => v.to_string(),
        MapKey::String(v) => v.clone(),
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(v) => write!(f, "{}", v),
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::UInt(v) => write!(f, "{}", v),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Text(v) => f.write_str(v),
            FieldValue::Bytes(v) => f.write_str(&crate::codec::format_bytes(v)),
            FieldValue::Enum(v) => write!(f, "{}", v),
            FieldValue::List(items) => {
                let parts: Vec<String> = items.iter().map(|item| item.to_string()).collect();
                write!(f, "[{}]", parts.join(" "))
            }
            FieldValue::Message(pairs) | FieldValue::Map(pairs) => {
                let parts: Vec<String> = pairs
                    .iter()
                    .map(|(name, value)| format!("{}:{}", name, value))
                    .collect();
                write!(f, "{{{}}}", parts.join(" "))
            }
        }
    }
}
