//! Builder for the shared service state.
//!
//! The feature database can come from a JSON file or from an in-memory list;
//! with neither, the service starts with an empty store.

use crate::config::Config;
use crate::db::{FeatureStore, RouteGuide};
use crate::error::{Result, RouteGuideError};
use routeguide_types::Feature;
use std::path::PathBuf;

#[derive(Debug, Default)]
enum Source {
    #[default]
    Empty,
    Path(PathBuf),
    Features(Vec<Feature>),
}

/// Builder for [`RouteGuide`].
#[derive(Debug, Default)]
pub struct RouteGuideBuilder {
    source: Source,
    config: Config,
}

impl RouteGuideBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load features from the JSON database at `path` on build.
    pub fn db_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.source = Source::Path(path.into());
        self
    }

    /// Use an in-memory feature list.
    pub fn features(mut self, features: Vec<Feature>) -> Self {
        self.source = Source::Features(features);
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Validate the config and load the feature store.
    pub fn build(self) -> Result<RouteGuide> {
        self.config
            .validate()
            .map_err(RouteGuideError::InvalidConfig)?;

        let store = match self.source {
            Source::Empty => {
                log::warn!("No feature database given, starting with an empty store");
                FeatureStore::default()
            }
            Source::Path(path) => crate::storage::load_features(path)?,
            Source::Features(features) => FeatureStore::new(features),
        };

        Ok(RouteGuide::with_config(store, self.config))
    }
}
