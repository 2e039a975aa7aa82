//! Shared service state.
//!
//! [`RouteGuide`] bundles the read-only [`FeatureStore`] and the shared
//! [`NoteExchange`]. It is cheap to clone; every clone points at the same
//! store and the same note log.

use crate::compute::RouteAggregator;
use crate::config::Config;
use routeguide_types::{Feature, Point, Rectangle, RouteNote};
use std::sync::Arc;

mod feature_store;
mod note_log;

pub use feature_store::FeatureStore;
pub use note_log::NoteExchange;

/// State shared by every call the service handles.
///
/// - **Features**: loaded once, read without locks
/// - **Notes**: one log for all chat calls, serialized per note
#[derive(Debug, Clone)]
pub struct RouteGuide {
    pub(crate) features: Arc<FeatureStore>,
    pub(crate) notes: Arc<NoteExchange>,
    pub(crate) config: Config,
}

impl RouteGuide {
    pub fn builder() -> crate::builder::RouteGuideBuilder {
        crate::builder::RouteGuideBuilder::new()
    }

    /// Wrap an already built store with an empty note log and default config.
    pub fn new(features: FeatureStore) -> Self {
        Self::with_config(features, Config::default())
    }

    pub fn with_config(features: FeatureStore, config: Config) -> Self {
        Self {
            features: Arc::new(features),
            notes: Arc::new(NoteExchange::new()),
            config,
        }
    }

    pub fn features(&self) -> &Arc<FeatureStore> {
        &self.features
    }

    pub fn notes(&self) -> &Arc<NoteExchange> {
        &self.notes
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Point lookup. Misses come back as an unnamed feature at `point`.
    pub fn get_feature(&self, point: &Point) -> Feature {
        self.features.find_by_point(point)
    }

    /// Materialized listing of the features inside `rect`, in store order.
    pub fn list_features(&self, rect: Rectangle) -> Vec<Feature> {
        self.features.find_in_rectangle(rect).cloned().collect()
    }

    /// Fresh aggregator for one recorded route, clock started now.
    pub fn route_recorder(&self) -> RouteAggregator<'_> {
        RouteAggregator::new(&self.features)
    }

    /// Store `note` and return the earlier notes at its location.
    pub fn exchange_note(&self, note: RouteNote) -> Vec<RouteNote> {
        self.notes.exchange(note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guide() -> RouteGuide {
        RouteGuide::new(FeatureStore::new(vec![Feature::new(
            "A",
            Point::new(10_000_000, 10_000_000),
        )]))
    }

    #[test]
    fn test_get_feature_scenario() {
        let guide = guide();
        assert_eq!(
            guide.get_feature(&Point::new(10_000_000, 10_000_000)),
            Feature::new("A", Point::new(10_000_000, 10_000_000))
        );
        assert_eq!(
            guide.get_feature(&Point::new(0, 0)),
            Feature::new("", Point::new(0, 0))
        );
    }

    #[test]
    fn test_list_features_scenario() {
        let guide = guide();
        let rect = Rectangle::new(Point::new(0, 0), Point::new(20_000_000, 20_000_000));
        let names: Vec<String> = guide.list_features(rect).into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["A".to_string()]);
    }

    #[test]
    fn test_clones_share_the_note_log() {
        let guide = guide();
        let other = guide.clone();

        guide.exchange_note(RouteNote::new("from one", Point::new(1, 1)));
        let echoes = other.exchange_note(RouteNote::new("from two", Point::new(1, 1)));

        assert_eq!(echoes, vec![RouteNote::new("from one", Point::new(1, 1))]);
        assert_eq!(guide.notes().len(), 2);
    }

    #[test]
    fn test_route_recorder_is_fresh_per_call() {
        let guide = guide();
        let mut first = guide.route_recorder();
        first.record(Point::new(10_000_000, 10_000_000));
        assert_eq!(first.finish().point_count, 1);

        let second = guide.route_recorder();
        assert_eq!(second.point_count(), 0);
    }
}
