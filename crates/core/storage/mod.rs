//! Loading the feature database.
//!
//! The database is a JSON array of `{"location": {...}, "name": "..."}`
//! records. It is read once at startup; record order becomes store order.

use crate::db::FeatureStore;
use crate::error::{Result, RouteGuideError};
use routeguide_types::Feature;
use std::path::Path;

/// Parse a feature database from its JSON text.
pub fn parse_features(json: &str) -> std::result::Result<Vec<Feature>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Read and parse the feature database at `path`.
pub fn load_features<P: AsRef<Path>>(path: P) -> Result<FeatureStore> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;

    let features = parse_features(&contents).map_err(|e| RouteGuideError::InvalidDatabase {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let unnamed = features.iter().filter(|f| !f.is_named()).count();
    log::info!(
        "Loaded {} features from {} ({} unnamed)",
        features.len(),
        path.display(),
        unnamed
    );

    Ok(FeatureStore::new(features))
}

#[cfg(test)]
mod tests {
    use super::*;
    use routeguide_types::Point;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const DB: &str = r#"[
        {"location": {"latitude": 407838351, "longitude": -746143763}, "name": "Patriots Path, Mendham, NJ 07945, USA"},
        {"location": {"latitude": 408122808, "longitude": -743999179}, "name": "101 New Jersey 10, Whippany, NJ 07981, USA"},
        {"location": {"latitude": 414611981, "longitude": -740733336}, "name": ""}
    ]"#;

    #[test]
    fn test_parse_keeps_order_and_unnamed_records() {
        let features = parse_features(DB).unwrap();
        assert_eq!(features.len(), 3);
        assert_eq!(features[0].location, Point::new(407_838_351, -746_143_763));
        assert_eq!(features[1].name, "101 New Jersey 10, Whippany, NJ 07981, USA");
        assert!(!features[2].is_named());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(DB.as_bytes()).unwrap();

        let store = load_features(file.path()).unwrap();
        assert_eq!(store.len(), 3);
        assert!(store.is_feature(&Point::new(408_122_808, -743_999_179)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_features(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, RouteGuideError::Io(_)));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[{\"name\": \"no location\"}]").unwrap();

        let err = load_features(file.path()).unwrap_err();
        assert!(matches!(err, RouteGuideError::InvalidDatabase { .. }));
    }
}
