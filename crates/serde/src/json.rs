//! JSON persistence for transfer objects.
//!
//! Thin wrappers around `serde_json` used to store DTOs (editor session data, exports)
//! next to the XML files they were built from. File writes go through the same atomic
//! temp-file path as XML saves.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SerdeError};
use crate::xml::ser::write_atomic;

/// Deserialize a DTO from a JSON string.
///
/// # Examples
///
/// ```ignore
/// use modforge_serde::json::from_json_str;
/// use modforge_model::transfer::AttributesDto;
///
/// let json = r#"{"attributes": [{"id": "AgentHitPoints"}]}"#;
/// let dto: AttributesDto = from_json_str(json)?;
/// ```
pub fn from_json_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    Ok(serde_json::from_str(s)?)
}

/// Serialize a DTO to a pretty-printed JSON string.
///
/// # Examples
///
/// ```ignore
/// use modforge_serde::json::to_json_string_pretty;
///
/// let json = to_json_string_pretty(&attributes.to_dto())?;
/// ```
pub fn to_json_string_pretty<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string_pretty(value)?)
}

/// Pretty-printed JSON bytes, as written by [`to_json_path`].
pub fn to_json_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_vec_pretty(value)?)
}

/// Reads a DTO from a JSON file.
///
/// # Errors
///
/// [`SerdeError::NotFound`] when the path does not exist.
pub fn from_json_path<T>(path: impl AsRef<Path>) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let path = path.as_ref();
    if !path.exists() {
        return Err(SerdeError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Writes a DTO to a JSON file atomically, pretty-printed.
pub fn to_json_path<T>(value: &T, path: impl AsRef<Path>) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let bytes = to_json_vec(value)?;
    write_atomic(path.as_ref(), &bytes)
}
