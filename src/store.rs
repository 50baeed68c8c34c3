// Blip snapshot loading
//
// Read-only source of blip records. A snapshot is a JSON array of
// `{ id?, name, quadrant, ring, description, owner }` objects; without a
// path the embedded sample snapshot is used.

use crate::radar::{RadarError, RawBlip, Result};
use std::fs;
use std::path::Path;

/// Snapshot bundled into the binary
const SAMPLE_SNAPSHOT: &str = include_str!("../data/sample_blips.json");

/// Parse a snapshot from JSON text
pub fn parse_snapshot(json: &str) -> Result<Vec<RawBlip>> {
    Ok(serde_json::from_str(json)?)
}

/// Load raw records from a JSON file
///
/// # Errors
/// `Load` when the file cannot be read, `Parse` when its content is not an
/// array of blip records.
pub fn load_snapshot(path: &Path) -> Result<Vec<RawBlip>> {
    let text = fs::read_to_string(path).map_err(|source| RadarError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let raws = parse_snapshot(&text)?;
    tracing::info!(path = %path.display(), records = raws.len(), "Loaded blip snapshot");
    Ok(raws)
}

/// Records from the embedded sample snapshot
pub fn sample_snapshot() -> Result<Vec<RawBlip>> {
    parse_snapshot(SAMPLE_SNAPSHOT)
}

/// Load from `path` when given, otherwise fall back to the sample
pub fn load_or_sample(path: Option<&Path>) -> Result<Vec<RawBlip>> {
    match path {
        Some(p) => load_snapshot(p),
        None => sample_snapshot(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radar::{validate_batch, ValidationPolicy};
    use std::io::Write;

    #[test]
    fn test_sample_snapshot_is_fully_valid() {
        let raws = sample_snapshot().unwrap();
        assert!(!raws.is_empty());
        let batch = validate_batch(raws, ValidationPolicy::Strict).unwrap();
        assert!(batch.rejected.is_empty());
        assert!(batch.blips.iter().all(|b| b.id.is_some()));
    }

    #[test]
    fn test_parse_minimal_record() {
        let raws = parse_snapshot(r#"[{"name":"Rust","quadrant":"Tools","ring":"Hold"}]"#).unwrap();
        assert_eq!(raws.len(), 1);
        assert_eq!(raws[0].id, None);
        assert_eq!(raws[0].owner, "");
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_snapshot(r#"{"name":"Rust"}"#).unwrap_err();
        assert!(matches!(err, RadarError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let path = std::env::temp_dir().join("radarscope-does-not-exist.json");
        let err = load_snapshot(&path).unwrap_err();
        assert!(matches!(err, RadarError::Load { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "radarscope-store-test-{}.json",
            std::process::id()
        ));
        {
            let mut file = fs::File::create(&path).unwrap();
            write!(
                file,
                r#"[{{"id":"7","name":"Kafka","quadrant":"Platforms","ring":"Trial","owner":"data"}}]"#
            )
            .unwrap();
        }
        let raws = load_or_sample(Some(&path)).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(raws.len(), 1);
        assert_eq!(raws[0].id.as_deref(), Some("7"));
    }
}
