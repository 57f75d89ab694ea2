use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use prost::Message;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use crate::codec;
use crate::errors::{PbTourError, Result};

/// Create (or truncate) `path` and write the whole payload.
///
/// The handle is dropped before returning, on success and on error alike.
pub fn write_bytes(path: &Path, data: &[u8]) -> Result<usize> {
    let mut file = File::create(path).map_err(|e| PbTourError::io(path, e))?;
    file.write_all(data).map_err(|e| PbTourError::io(path, e))?;
    file.flush().map_err(|e| PbTourError::io(path, e))?;

    info!(target = "storage", path = %path.display(), len = data.len(), "file written");
    Ok(data.len())
}

pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| PbTourError::io(path, e))?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)
        .map_err(|e| PbTourError::io(path, e))?;

    debug!(target = "storage", path = %path.display(), len = data.len(), "file read");
    Ok(data)
}

pub fn write_message<M: Message>(path: &Path, message: &M) -> Result<usize> {
    write_bytes(path, &codec::encode(message))
}

pub fn read_message<M: Message + Default>(path: &Path) -> Result<M> {
    let data = read_bytes(path)?;
    codec::decode(&data)
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<usize> {
    write_bytes(path, &codec::to_json(value)?)
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = read_bytes(path)?;
    codec::from_json(&data)
}
