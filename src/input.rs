use crate::error::GenerateError;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Reads a JSON input file. A missing or unreadable file is the one fatal
/// input condition; any parsed JSON value is accepted by the pipeline.
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<Value, GenerateError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| GenerateError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| GenerateError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}
