use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::medium::StorageMedium;

/// Load a JSON record. `Ok(None)` when nothing is stored under `key`.
pub fn load_state<T: DeserializeOwned>(
    medium: &impl StorageMedium,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(contents) = medium.read(key)? else {
        return Ok(None);
    };
    let value: T = serde_json::from_str(&contents)?;
    Ok(Some(value))
}

/// Serialize `value` as pretty JSON and replace the record under `key`.
pub fn save_state<T: Serialize>(
    medium: &impl StorageMedium,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_string_pretty(value)?;
    medium.write(key, &body)
}
