//! Per-call route aggregation.
//!
//! A [`RouteAggregator`] lives for exactly one recorded route. It starts
//! measuring time when it is created, accumulates points as they arrive and
//! is consumed by [`RouteAggregator::finish`], so a summary can only be
//! produced once.

use crate::db::FeatureStore;
use routeguide_types::{Point, RouteSummary};
use std::time::Instant;

/// Accumulates trip statistics for a stream of points.
#[derive(Debug)]
pub struct RouteAggregator<'a> {
    store: &'a FeatureStore,
    started: Instant,
    point_count: i32,
    feature_count: i32,
    distance: f64,
    previous: Option<Point>,
}

impl<'a> RouteAggregator<'a> {
    /// Start a new route at the current instant.
    pub fn new(store: &'a FeatureStore) -> Self {
        Self::started_at(store, Instant::now())
    }

    /// Start a new route whose clock began at `started`.
    pub fn started_at(store: &'a FeatureStore, started: Instant) -> Self {
        Self {
            store,
            started,
            point_count: 0,
            feature_count: 0,
            distance: 0.0,
            previous: None,
        }
    }

    /// Account for the next point of the route.
    pub fn record(&mut self, point: Point) {
        self.point_count = self.point_count.saturating_add(1);

        if self.store.is_feature(&point) {
            self.feature_count = self.feature_count.saturating_add(1);
        }

        if let Some(previous) = self.previous {
            self.distance += previous.haversine_distance(&point);
        }
        self.previous = Some(point);
    }

    pub fn point_count(&self) -> i32 {
        self.point_count
    }

    /// Distance covered so far in meters, before truncation.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Close the route now and produce its summary.
    pub fn finish(self) -> RouteSummary {
        self.finish_at(Instant::now())
    }

    /// Close the route at `ended` and produce its summary.
    ///
    /// Distance and elapsed time are truncated to whole meters and seconds.
    pub fn finish_at(self, ended: Instant) -> RouteSummary {
        let elapsed = ended.saturating_duration_since(self.started).as_secs();

        RouteSummary {
            point_count: self.point_count,
            feature_count: self.feature_count,
            distance: self.distance as i32,
            elapsed_time: i32::try_from(elapsed).unwrap_or(i32::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routeguide_types::Feature;
    use std::time::Duration;

    fn store() -> FeatureStore {
        FeatureStore::new(vec![
            Feature::new("A", Point::new(10_000_000, 10_000_000)),
            Feature::new("B", Point::new(407_838_351, -746_143_763)),
            Feature::new("", Point::new(0, 0)),
        ])
    }

    #[test]
    fn test_empty_route() {
        let store = store();
        let start = Instant::now();
        let summary = RouteAggregator::started_at(&store, start).finish_at(start);
        assert_eq!(summary, RouteSummary::default());
    }

    #[test]
    fn test_empty_route_still_measures_time() {
        let store = store();
        let start = Instant::now();
        let summary = RouteAggregator::started_at(&store, start)
            .finish_at(start + Duration::from_millis(3_900));
        assert_eq!(summary.point_count, 0);
        assert_eq!(summary.distance, 0);
        assert_eq!(summary.elapsed_time, 3);
    }

    #[test]
    fn test_identical_points_cover_no_distance() {
        let store = store();
        let mut agg = RouteAggregator::new(&store);
        agg.record(Point::new(0, 0));
        agg.record(Point::new(0, 0));
        let summary = agg.finish();
        assert_eq!(summary.point_count, 2);
        // (0, 0) is stored without a name, so it is not a feature
        assert_eq!(summary.feature_count, 0);
        assert_eq!(summary.distance, 0);
    }

    #[test]
    fn test_single_point_has_no_leg() {
        let store = store();
        let mut agg = RouteAggregator::new(&store);
        agg.record(Point::new(10_000_000, 10_000_000));
        let summary = agg.finish();
        assert_eq!(summary.point_count, 1);
        assert_eq!(summary.feature_count, 1);
        assert_eq!(summary.distance, 0);
    }

    #[test]
    fn test_counts_and_truncated_distance() {
        let store = store();
        let route = [
            Point::new(10_000_000, 10_000_000),
            Point::new(407_838_351, -746_143_763),
            Point::new(413_628_156, -749_015_468),
            Point::new(10_000_000, 10_000_000),
            Point::new(-33_000_000, 151_000_000),
        ];

        let expected_distance: f64 = route
            .windows(2)
            .map(|leg| leg[0].haversine_distance(&leg[1]))
            .sum();

        let mut agg = RouteAggregator::new(&store);
        for p in route {
            agg.record(p);
        }
        assert!((agg.distance() - expected_distance).abs() < 1e-6);

        let summary = agg.finish();
        assert_eq!(summary.point_count, 5);
        assert_eq!(summary.feature_count, 3);
        assert_eq!(summary.distance, expected_distance.floor() as i32);
    }

    #[test]
    fn test_distance_is_truncated_not_rounded() {
        let store = FeatureStore::default();
        // One degree of longitude at the equator is 111194.93 m
        let mut agg = RouteAggregator::new(&store);
        agg.record(Point::new(0, 0));
        agg.record(Point::new(0, 10_000_000));
        assert_eq!(agg.finish().distance, 111_194);
    }
}
