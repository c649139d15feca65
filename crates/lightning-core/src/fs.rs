use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::error::StoreError;

/// Read a whole JSON document from disk
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| StoreError::InvalidFormat {
        path: path.to_path_buf(),
        source,
    })
}

/// Indented JSON (two spaces), replacing the target atomically
pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<u64, StoreError> {
    let json = serde_json::to_vec_pretty(value)?;
    write_atomic(path, &json)?;
    Ok(json.len() as u64)
}

/// Separator-minimized JSON, replacing the target atomically
pub fn write_json_minified<T: Serialize>(path: &Path, value: &T) -> Result<u64, StoreError> {
    let json = serde_json::to_vec(value)?;
    write_atomic(path, &json)?;
    Ok(json.len() as u64)
}

/// Write to a sibling temp file, then rename over the target.
/// Readers never observe a truncated file.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| StoreError::io(parent, e))?;
    temp.write_all(contents)
        .map_err(|e| StoreError::io(temp.path(), e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| StoreError::io(temp.path(), e))?;
    temp.persist(path)
        .map_err(|e| StoreError::io(path, e.error))?;

    tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// File size in megabytes, for log output
pub fn size_mb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn pretty_and_minified_decode_identically() {
        let dir = tempfile::tempdir().unwrap();
        let pretty = dir.path().join("out/pretty.json");
        let minified = dir.path().join("out/min.json");
        let value = json!({"words": {"run": {"rank": 3}}, "version": "1.0"});

        let pretty_len = write_json_pretty(&pretty, &value).unwrap();
        let min_len = write_json_minified(&minified, &value).unwrap();

        assert!(min_len < pretty_len);
        let a: Value = read_json(&pretty).unwrap();
        let b: Value = read_json(&minified).unwrap();
        assert_eq!(a, b);
        assert!(fs::read_to_string(&pretty).unwrap().contains("\n  \""));
    }

    #[test]
    fn write_atomic_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.json");
        fs::write(&path, "old contents that are longer").unwrap();

        write_atomic(&path, b"new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<Value, _> = read_json(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(StoreError::FileNotFound(_))));
    }

    #[test]
    fn malformed_json_is_invalid_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let result: Result<Value, _> = read_json(&path);
        assert!(matches!(result, Err(StoreError::InvalidFormat { .. })));
    }
}
